//! GET operations for AvlTree.
//!
//! Lookups descend by value using the same predicate as insertion. A node
//! whose value equals the target but whose key differs may have the wanted
//! record on either side (rotations move equal values across), so both
//! subtrees are tried, left first.

use std::cmp::Ordering;

use tracing::trace;

use crate::error::{AvlStoreError, KeyResult};
use crate::types::{AvlTree, NodeId, Record};

impl AvlTree {
    /// Find the record with exactly this `key` and `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avlstore::{AvlTree, Record};
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(Record::new("alice", 30));
    /// tree.insert(Record::new("bob", 30));
    ///
    /// assert_eq!(tree.search("bob", 30), Some(&Record::new("bob", 30)));
    /// assert_eq!(tree.search("bob", 31), None);
    /// assert_eq!(tree.search("", 30), None);
    /// ```
    pub fn search(&self, key: &str, value: i32) -> Option<&Record> {
        let found = self
            .find_node(self.root, key, value)
            .and_then(|id| self.nodes.get(id))
            .map(|node| &node.record);
        trace!(key, value, found = found.is_some(), "search");
        found
    }

    /// Check if a record with this `key` and `value` exists.
    pub fn contains(&self, key: &str, value: i32) -> bool {
        self.find_node(self.root, key, value).is_some()
    }

    /// Like [`search`](Self::search) but reports a miss as
    /// [`AvlStoreError::RecordNotFound`].
    pub fn search_item(&self, key: &str, value: i32) -> KeyResult<&Record> {
        self.search(key, value)
            .ok_or_else(|| AvlStoreError::not_found(key, value))
    }

    /// Id of the node holding `(key, value)` within the subtree at `id`.
    pub(crate) fn find_node(&self, id: NodeId, key: &str, value: i32) -> Option<NodeId> {
        let node = self.nodes.get(id)?;
        if node.record.matches(key, value) {
            return Some(id);
        }

        match value.cmp(&node.record.value()) {
            Ordering::Less => self.find_node(node.left, key, value),
            Ordering::Greater => self.find_node(node.right, key, value),
            Ordering::Equal => self
                .find_node(node.left, key, value)
                .or_else(|| self.find_node(node.right, key, value)),
        }
    }
}
