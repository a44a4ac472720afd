//! INSERT operations for AvlTree.
//!
//! Records are routed by value: a node whose value is strictly greater than
//! the incoming one sends it left, everything else (including equal values)
//! goes right. The new leaf is linked in and the path is rebalanced on the
//! way back up.

use tracing::{trace, warn};

use crate::construction::DuplicatePolicy;
use crate::error::{AvlStoreError, ModifyResult};
use crate::types::{AvlNode, AvlTree, NodeId, Record};

impl AvlTree {
    /// Insert a record.
    ///
    /// Returns `true` when a node was added. The only way to get `false` is a
    /// tree configured with [`DuplicatePolicy::Reject`] that already holds the
    /// same `(key, value)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avlstore::{AvlTree, Record};
    ///
    /// let mut tree = AvlTree::new();
    /// for value in [1, 2, 3] {
    ///     tree.insert(Record::new(format!("k{value}"), value));
    /// }
    /// assert_eq!(tree.height(), 2);
    /// assert_eq!(tree.root_record().map(|r| r.value()), Some(2));
    /// ```
    pub fn insert(&mut self, record: Record) -> bool {
        if self.config.duplicate_policy == DuplicatePolicy::Reject
            && self.contains(record.key(), record.value())
        {
            warn!(
                key = record.key(),
                value = record.value(),
                "duplicate record rejected"
            );
            return false;
        }

        trace!(key = record.key(), value = record.value(), "insert");
        let root = self.insert_recursive(self.root, record);
        self.root = self.rebalance(root);
        self.len += 1;
        true
    }

    /// Insert after checking the tree, then check it again.
    ///
    /// Fails with [`AvlStoreError::DuplicateRecord`] when the duplicate policy
    /// refuses the record and with `DataIntegrityError` when validation finds
    /// a broken invariant.
    pub fn try_insert(&mut self, record: Record) -> ModifyResult<()> {
        self.validate_for_operation("insert")?;

        if !self.insert(record.clone()) {
            return Err(AvlStoreError::duplicate(record.key(), record.value()));
        }

        self.validate_for_operation("insert")
    }

    fn insert_recursive(&mut self, id: NodeId, record: Record) -> NodeId {
        let Some(node) = self.nodes.get(id) else {
            return self.nodes.allocate(AvlNode::leaf(record));
        };
        let go_left = node.record.value() > record.value();
        let (left, right, prior_height) = (node.left, node.right, node.height);

        let child = if go_left {
            let child = self.insert_recursive(left, record);
            self.set_left(id, child);
            child
        } else {
            let child = self.insert_recursive(right, record);
            self.set_right(id, child);
            child
        };

        // Only the child we descended into changed, and it can only grow
        let child_height = self.height_of(child);
        if child_height >= prior_height {
            if let Some(node) = self.nodes.get_mut(id) {
                node.height = child_height + 1;
            }
        }

        self.rebalance(id)
    }
}
