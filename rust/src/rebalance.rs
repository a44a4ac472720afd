//! Height bookkeeping, rotations and rebalancing.
//!
//! Every mutation calls [`AvlTree::rebalance`] on each node of the path it
//! touched, bottom-up, so the balance factor of every node stays within ±1.

use crate::macros::mirrored_rotation;
use crate::types::{AvlTree, NodeId, NULL_NODE};

impl AvlTree {
    /// Cached height of `id`, 0 for an absent subtree.
    #[inline]
    pub(crate) fn height_of(&self, id: NodeId) -> i32 {
        self.nodes.get(id).map_or(0, |node| node.height)
    }

    /// Left height minus right height, 0 for an absent subtree.
    #[inline]
    pub(crate) fn balance_of(&self, id: NodeId) -> i32 {
        if id == NULL_NODE {
            return 0;
        }
        self.height_of(self.left_of(id)) - self.height_of(self.right_of(id))
    }

    /// Recompute the cached height of `id` from its children.
    #[inline]
    pub(crate) fn update_height(&mut self, id: NodeId) {
        let height = 1 + self
            .height_of(self.left_of(id))
            .max(self.height_of(self.right_of(id)));
        if let Some(node) = self.nodes.get_mut(id) {
            node.height = height;
        }
    }

    mirrored_rotation!(
        /// Right rotation: the left child becomes the subtree root.
        rotate_right,
        left,
        right
    );

    mirrored_rotation!(
        /// Left rotation: the right child becomes the subtree root.
        rotate_left,
        right,
        left
    );

    /// Restore the AVL property at `id` and return the subtree's new root.
    ///
    /// Children that are themselves out of balance are fixed first. Then:
    /// a left-heavy node takes a right rotation, preceded by a left rotation of
    /// its left child when that child leans right; right-heavy is the mirror.
    /// A node already in balance only has its height refreshed.
    pub(crate) fn rebalance(&mut self, id: NodeId) -> NodeId {
        if id == NULL_NODE {
            return id;
        }

        let left = self.left_of(id);
        if self.balance_of(left).abs() > 1 {
            let left = self.rebalance(left);
            self.set_left(id, left);
        }
        let right = self.right_of(id);
        if self.balance_of(right).abs() > 1 {
            let right = self.rebalance(right);
            self.set_right(id, right);
        }

        let balance = self.balance_of(id);
        if balance > 1 {
            let left = self.left_of(id);
            if self.balance_of(left) < 0 {
                let left = self.rotate_left(left);
                self.set_left(id, left);
            }
            self.rotate_right(id)
        } else if balance < -1 {
            let right = self.right_of(id);
            if self.balance_of(right) > 0 {
                let right = self.rotate_right(right);
                self.set_right(id, right);
            }
            self.rotate_left(id)
        } else {
            self.update_height(id);
            id
        }
    }
}
