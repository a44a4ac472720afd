//! k-nearest-neighbour queries by ordering value.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use tracing::trace;

use crate::types::{AvlTree, Record};

/// Min-heap entry: distance to the target, then in-order position.
type Candidate = Reverse<(u32, usize)>;

impl AvlTree {
    /// Up to `k` records whose value is closest to `value`, skipping records
    /// whose value equals it.
    ///
    /// Picks are made greedily, nearest first, taking from below the target
    /// when a record below and one above are equally far. The picked list is
    /// then reversed, so the result runs from the k-th nearest down to the
    /// nearest.
    ///
    /// # Examples
    ///
    /// ```
    /// use avlstore::{AvlTree, Record};
    ///
    /// let mut tree = AvlTree::new();
    /// for value in [10, 20, 30] {
    ///     tree.insert(Record::new(format!("v{value}"), value));
    /// }
    ///
    /// let values: Vec<i32> = tree.find_k_nearest_keys(20, 5).iter().map(|r| r.value()).collect();
    /// assert_eq!(values, [30, 10]);
    /// ```
    pub fn find_k_nearest_keys(&self, value: i32, k: usize) -> Vec<&Record> {
        if k == 0 || self.is_empty() {
            return Vec::new();
        }

        let records = self.inorder_traversal();
        let mut below: BinaryHeap<Candidate> = BinaryHeap::new();
        let mut above: BinaryHeap<Candidate> = BinaryHeap::new();
        for (position, record) in records.iter().enumerate() {
            let candidate = Reverse((value.abs_diff(record.value()), position));
            match record.value().cmp(&value) {
                Ordering::Less => below.push(candidate),
                Ordering::Greater => above.push(candidate),
                Ordering::Equal => {}
            }
        }

        let mut picks = Vec::with_capacity(k.min(below.len() + above.len()));
        while picks.len() < k {
            let take_below = match (below.peek(), above.peek()) {
                (Some(Reverse((low, _))), Some(Reverse((high, _)))) => low <= high,
                (Some(_), None) => true,
                (None, Some(_)) => false,
                (None, None) => break,
            };
            let side = if take_below { &mut below } else { &mut above };
            let Some(Reverse((_, position))) = side.pop() else {
                break;
            };
            picks.push(records[position]);
        }
        picks.reverse();

        trace!(value, k, found = picks.len(), "k-nearest");
        picks
    }
}
