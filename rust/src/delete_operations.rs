//! DELETE operations for AvlTree.
//!
//! This module contains record removal, successor splicing for nodes with two
//! children, and whole-tree release.

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::error::{AvlStoreError, ModifyResult};
use crate::types::{AvlNode, AvlTree, NodeId, Record, NULL_NODE};

impl AvlTree {
    /// Remove the record with exactly this `key` and `value`.
    ///
    /// Returns the removed record, or `None` (tree untouched) when nothing
    /// matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use avlstore::{AvlTree, Record};
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(Record::new("a", 1));
    /// tree.insert(Record::new("b", 2));
    ///
    /// assert_eq!(tree.delete_node("a", 1), Some(Record::new("a", 1)));
    /// assert_eq!(tree.delete_node("a", 1), None);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn delete_node(&mut self, key: &str, value: i32) -> Option<Record> {
        let (root, removed) = self.delete_recursive(self.root, key, value);
        self.root = root;

        if removed.is_some() {
            self.len -= 1;
        }
        trace!(key, value, removed = removed.is_some(), "delete");
        removed
    }

    /// Delete after checking the tree, then check it again.
    ///
    /// A missing record is reported as [`AvlStoreError::RecordNotFound`].
    pub fn try_delete(&mut self, key: &str, value: i32) -> ModifyResult<Record> {
        self.validate_for_operation("delete")?;

        let record = self
            .delete_node(key, value)
            .ok_or_else(|| AvlStoreError::not_found(key, value))?;

        self.validate_for_operation("delete")?;
        Ok(record)
    }

    /// Release every node in post-order and leave the tree empty.
    pub fn delete_all(&mut self) {
        let released = self.release_subtree(self.root);
        self.root = NULL_NODE;
        self.len = 0;
        debug!(released, "released all nodes");
    }

    /// Returns the new root of the subtree at `id` and the removed record.
    fn delete_recursive(&mut self, id: NodeId, key: &str, value: i32) -> (NodeId, Option<Record>) {
        let Some(node) = self.nodes.get(id) else {
            return (NULL_NODE, None);
        };
        if node.record.matches(key, value) {
            return match self.unlink(id) {
                Some((replacement, record)) => (replacement, Some(record)),
                None => (id, None),
            };
        }

        let (left, right) = (node.left, node.right);
        let removed = match value.cmp(&node.record.value()) {
            Ordering::Less => self.delete_from_left(id, left, key, value),
            Ordering::Greater => self.delete_from_right(id, right, key, value),
            Ordering::Equal => self
                .delete_from_left(id, left, key, value)
                .or_else(|| self.delete_from_right(id, right, key, value)),
        };

        match removed {
            Some(record) => (self.rebalance(id), Some(record)),
            None => (id, None),
        }
    }

    fn delete_from_left(&mut self, id: NodeId, left: NodeId, key: &str, value: i32) -> Option<Record> {
        let (child, removed) = self.delete_recursive(left, key, value);
        self.set_left(id, child);
        removed
    }

    fn delete_from_right(&mut self, id: NodeId, right: NodeId, key: &str, value: i32) -> Option<Record> {
        let (child, removed) = self.delete_recursive(right, key, value);
        self.set_right(id, child);
        removed
    }

    /// Take the node at `id` out of its subtree.
    ///
    /// With two children the in-order successor's record moves into `id` and
    /// the successor node is the one released. Otherwise the sole child (or
    /// nothing) takes the node's place.
    fn unlink(&mut self, id: NodeId) -> Option<(NodeId, Record)> {
        let node = self.nodes.get(id)?;
        let (left, right) = (node.left, node.right);

        if left != NULL_NODE && right != NULL_NODE {
            let (new_right, successor) = self.detach_min(right)?;
            let node = self.nodes.get_mut(id)?;
            let removed = std::mem::replace(&mut node.record, successor.record);
            node.right = new_right;
            return Some((self.rebalance(id), removed));
        }

        let replacement = if left != NULL_NODE { left } else { right };
        let released = self.nodes.deallocate(id)?;
        Some((replacement, released.record))
    }

    /// Remove the left-most node under `id`, rebalancing on the way back up.
    /// Returns the subtree's new root and the detached node.
    fn detach_min(&mut self, id: NodeId) -> Option<(NodeId, AvlNode)> {
        let left = self.left_of(id);
        if left == NULL_NODE {
            let right = self.right_of(id);
            let released = self.nodes.deallocate(id)?;
            return Some((right, released));
        }

        let (new_left, min) = self.detach_min(left)?;
        self.set_left(id, new_left);
        Some((self.rebalance(id), min))
    }

    fn release_subtree(&mut self, id: NodeId) -> usize {
        if id == NULL_NODE {
            return 0;
        }
        let (left, right) = (self.left_of(id), self.right_of(id));
        let children = self.release_subtree(left) + self.release_subtree(right);
        children + usize::from(self.nodes.deallocate(id).is_some())
    }
}
