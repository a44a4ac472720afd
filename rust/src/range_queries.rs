//! Range query operations for AvlTree.
//!
//! The walk prunes subtrees that cannot hold in-range values. Equal values
//! may sit on either side of a node, so the pruning tests are inclusive.

use std::ops::{Bound, RangeBounds};

use crate::types::{AvlTree, NodeId, Record, NULL_NODE};

// ============================================================================
// RANGE QUERY OPERATIONS
// ============================================================================

impl AvlTree {
    /// Records with `start <= value <= end`, in ascending order.
    ///
    /// An inverted range (`start > end`) is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use avlstore::{AvlTree, Record};
    ///
    /// let mut tree = AvlTree::new();
    /// for value in [10, 20, 30, 40, 50, 25] {
    ///     tree.insert(Record::new(format!("v{value}"), value));
    /// }
    ///
    /// let values: Vec<i32> = tree.range_query(15, 35).iter().map(|r| r.value()).collect();
    /// assert_eq!(values, [20, 25, 30]);
    /// ```
    pub fn range_query(&self, start: i32, end: i32) -> Vec<&Record> {
        let mut out = Vec::new();
        if start <= end {
            self.collect_range(self.root, start, end, &mut out);
        }
        out
    }

    /// Same as [`range_query`](Self::range_query) but takes Rust's range syntax.
    ///
    /// # Examples
    ///
    /// ```
    /// use avlstore::{AvlTree, Record};
    ///
    /// let mut tree = AvlTree::new();
    /// for value in 0..10 {
    ///     tree.insert(Record::new("k", value));
    /// }
    ///
    /// let half_open: Vec<i32> = tree.range(3..7).iter().map(|r| r.value()).collect();
    /// assert_eq!(half_open, [3, 4, 5, 6]);
    ///
    /// let tail: Vec<i32> = tree.range(7..).iter().map(|r| r.value()).collect();
    /// assert_eq!(tail, [7, 8, 9]);
    /// ```
    pub fn range<R>(&self, range: R) -> Vec<&Record>
    where
        R: RangeBounds<i32>,
    {
        match resolve_range_bounds(&range) {
            Some((start, end)) => self.range_query(start, end),
            None => Vec::new(),
        }
    }

    /// Returns the record with the smallest value.
    pub fn first(&self) -> Option<&Record> {
        self.extreme(self.root, |tree, id| tree.left_of(id))
    }

    /// Returns the record with the largest value.
    pub fn last(&self) -> Option<&Record> {
        self.extreme(self.root, |tree, id| tree.right_of(id))
    }

    fn extreme(&self, mut id: NodeId, step: impl Fn(&Self, NodeId) -> NodeId) -> Option<&Record> {
        if id == NULL_NODE {
            return None;
        }
        loop {
            let next = step(self, id);
            if next == NULL_NODE {
                return self.nodes.get(id).map(|node| &node.record);
            }
            id = next;
        }
    }

    fn collect_range<'a>(&'a self, id: NodeId, start: i32, end: i32, out: &mut Vec<&'a Record>) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        let value = node.record.value();

        if value >= start {
            self.collect_range(node.left, start, end, out);
        }
        if (start..=end).contains(&value) {
            out.push(&node.record);
        }
        if value <= end {
            self.collect_range(node.right, start, end, out);
        }
    }
}

// ============================================================================
// RANGE QUERY HELPERS
// ============================================================================

/// Turn arbitrary bounds into an inclusive `(start, end)` pair, or `None`
/// when no `i32` can satisfy them.
fn resolve_range_bounds<R: RangeBounds<i32>>(range: &R) -> Option<(i32, i32)> {
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start.checked_add(1)?,
        Bound::Unbounded => i32::MIN,
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => end,
        Bound::Excluded(&end) => end.checked_sub(1)?,
        Bound::Unbounded => i32::MAX,
    };
    Some((start, end))
}
