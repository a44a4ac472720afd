//! Tree structure management operations for AvlTree.
//!
//! Size queries, clearing, node counting, and arena statistics.

use crate::arena::CompactArenaStats;
use crate::types::{AvlTree, NodeId, Record, NULL_NODE};

impl AvlTree {
    /// Returns the number of records in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.root == NULL_NODE
    }

    /// Height of the whole tree: 0 when empty, 1 for a single node.
    pub fn height(&self) -> i32 {
        self.height_of(self.root)
    }

    /// The record at the root, if any.
    pub fn root_record(&self) -> Option<&Record> {
        self.nodes.get(self.root).map(|node| &node.record)
    }

    /// Remove every record and reset node storage.
    pub fn clear(&mut self) {
        self.delete_all();
        self.nodes.clear();
    }

    /// Count the nodes actually reachable from the root.
    pub fn node_count(&self) -> usize {
        self.count_nodes_recursive(self.root)
    }

    fn count_nodes_recursive(&self, id: NodeId) -> usize {
        match self.nodes.get(id) {
            Some(node) => {
                1 + self.count_nodes_recursive(node.left) + self.count_nodes_recursive(node.right)
            }
            None => 0,
        }
    }

    /// Get statistics for the node arena.
    pub fn arena_stats(&self) -> CompactArenaStats {
        self.nodes.stats()
    }
}
