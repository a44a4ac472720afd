//! Validation and debugging utilities for AvlTree.
//!
//! This module contains invariant checking (order, balance, cached heights,
//! single ownership, arena consistency) and a debugging dump.

use std::collections::HashSet;

use tracing::error;

use crate::error::{AvlStoreError, StoreResult, StoreResultExt};
use crate::types::{AvlTree, NodeId, NULL_NODE};

// ============================================================================
// VALIDATION METHODS
// ============================================================================

impl AvlTree {
    /// Check if the tree maintains its invariants.
    /// Returns true if all invariants are satisfied.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants with detailed error reporting.
    ///
    /// Verifies, for every reachable node: it is allocated, it has exactly one
    /// parent, its value respects every ancestor's bound, its cached height is
    /// `1 + max(child heights)`, and its balance factor is within ±1. Then the
    /// reachable node count is compared with the record counter and the arena.
    pub fn check_invariants_detailed(&self) -> StoreResult<()> {
        let mut visited = HashSet::with_capacity(self.len);
        self.check_node_invariants(self.root, None, None, &mut visited)?;

        if visited.len() != self.len {
            return Err(AvlStoreError::data_integrity(
                "Record count",
                &format!("{} reachable nodes vs counter {}", visited.len(), self.len),
            ));
        }

        let allocated = self.nodes.len();
        if allocated != visited.len() {
            return Err(AvlStoreError::data_integrity(
                "Arena consistency",
                &format!("{} in tree vs {} in arena", visited.len(), allocated),
            ));
        }

        Ok(())
    }

    /// Alias for check_invariants_detailed.
    pub fn validate(&self) -> StoreResult<()> {
        self.check_invariants_detailed()
    }

    /// Validate and tag any failure with the operation about to run.
    pub fn validate_for_operation(&self, operation: &str) -> StoreResult<()> {
        self.check_invariants_detailed()
            .with_operation(operation)
            .map_err(|e| {
                error!(operation, error = %e, "tree invariant violated");
                e
            })
    }

    /// Returns the subtree height computed from scratch.
    fn check_node_invariants(
        &self,
        id: NodeId,
        min: Option<i32>,
        max: Option<i32>,
        visited: &mut HashSet<NodeId>,
    ) -> StoreResult<i32> {
        if id == NULL_NODE {
            return Ok(0);
        }

        let node = self.nodes.get(id).ok_or_else(|| {
            AvlStoreError::data_integrity("Arena", &format!("node {} is linked but not allocated", id))
        })?;
        if !visited.insert(id) {
            return Err(AvlStoreError::data_integrity(
                "Ownership",
                &format!("node {} is reachable more than once", id),
            ));
        }

        let value = node.record.value();
        if min.is_some_and(|min| value < min) || max.is_some_and(|max| value > max) {
            return Err(AvlStoreError::data_integrity(
                "Order",
                &format!("node {} value {} outside [{:?}, {:?}]", id, value, min, max),
            ));
        }

        let left = self.check_node_invariants(node.left, min, Some(value), visited)?;
        let right = self.check_node_invariants(node.right, Some(value), max, visited)?;

        let expected = 1 + left.max(right);
        if node.height != expected {
            return Err(AvlStoreError::data_integrity(
                "Height",
                &format!("node {} caches {} but should be {}", id, node.height, expected),
            ));
        }
        if (left - right).abs() > 1 {
            return Err(AvlStoreError::data_integrity(
                "Balance",
                &format!("node {} has balance factor {}", id, left - right),
            ));
        }

        Ok(expected)
    }

    // ============================================================================
    // DEBUGGING AND TESTING UTILITIES
    // ============================================================================

    /// Prints the tree sideways (right subtree on top) for debugging.
    pub fn print_tree(&self) {
        println!("Tree structure ({} records):", self.len);
        self.print_node(self.root, 0);
    }

    fn print_node(&self, id: NodeId, depth: usize) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        self.print_node(node.right, depth + 1);
        println!(
            "{}{} [id={}, h={}, bf={}]",
            "    ".repeat(depth),
            node.record,
            id,
            node.height,
            self.balance_of(id)
        );
        self.print_node(node.left, depth + 1);
    }
}
