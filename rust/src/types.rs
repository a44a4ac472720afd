//! Core types and data structures for the AVL record store.
//!
//! This module contains the record type, the arena node layout, the tree
//! handle itself, and the node-id constants shared by every operation module.

use crate::arena::CompactArena;
use crate::construction::StoreConfig;

// ============================================================================
// TYPE DEFINITIONS
// ============================================================================

/// Node ID type for arena-based allocation
pub type NodeId = u32;

/// Marks an absent child or an empty tree.
pub const NULL_NODE: NodeId = u32::MAX;

// ============================================================================
// RECORDS
// ============================================================================

/// A `(key, value)` pair stored in the index.
///
/// `value` is the ordering field: it decides where the record lands in the
/// tree and drives range and nearest-neighbour queries. `key` is an opaque
/// identity tag that is only ever compared for exact equality, to tell apart
/// records that share a `value`.
///
/// Records are immutable once built.
///
/// # Examples
///
/// ```
/// use avlstore::Record;
///
/// let record = Record::new("alice", 42);
/// assert_eq!(record.key(), "alice");
/// assert_eq!(record.value(), 42);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Record {
    key: String,
    value: i32,
}

impl Record {
    /// Build a record from its identity tag and ordering value.
    pub fn new(key: impl Into<String>, value: i32) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    /// The identity tag.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The ordering value.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// True when both fields match exactly.
    #[inline]
    pub fn matches(&self, key: &str, value: i32) -> bool {
        self.value == value && self.key == key
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.key, self.value)
    }
}

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// A single tree node living in the arena.
///
/// Children are arena ids; `NULL_NODE` stands for an absent subtree. The
/// cached `height` is 1 for a leaf and absent children count as 0.
#[derive(Debug, Clone, Default)]
pub struct AvlNode {
    pub(crate) record: Record,
    pub(crate) left: NodeId,
    pub(crate) right: NodeId,
    pub(crate) height: i32,
}

impl AvlNode {
    /// A fresh leaf holding `record`.
    pub(crate) fn leaf(record: Record) -> Self {
        Self {
            record,
            left: NULL_NODE,
            right: NULL_NODE,
            height: 1,
        }
    }

    /// The record stored at this node.
    pub fn record(&self) -> &Record {
        &self.record
    }

    /// Returns true if neither child is present.
    pub fn is_leaf(&self) -> bool {
        self.left == NULL_NODE && self.right == NULL_NODE
    }
}

/// Height-balanced binary search tree ordered by [`Record::value`].
///
/// Nodes live in a [`CompactArena`] and link to each other by id, so
/// rotations and splices are plain id reassignments. Every public mutating
/// call leaves the tree ordered, AVL-balanced and with correct cached heights.
///
/// # Examples
///
/// ```
/// use avlstore::{AvlTree, Record};
///
/// let mut tree = AvlTree::new();
/// for (key, value) in [("a", 10), ("b", 20), ("c", 5), ("d", 6), ("e", 15)] {
///     tree.insert(Record::new(key, value));
/// }
///
/// let values: Vec<i32> = tree.inorder_traversal().iter().map(|r| r.value()).collect();
/// assert_eq!(values, [5, 6, 10, 15, 20]);
/// assert_eq!(tree.search("e", 15).map(|r| r.key()), Some("e"));
/// ```
///
/// # Performance Characteristics
///
/// - **Insertion**: O(log n)
/// - **Lookup**: O(log n) for distinct values
/// - **Deletion**: O(log n)
/// - **Range queries**: O(log n + k) where k is the number of records in range
/// - **k-nearest**: O(n) partition plus O(log n) per pick
#[derive(Debug)]
pub struct AvlTree {
    /// Root node id, `NULL_NODE` when empty.
    pub(crate) root: NodeId,
    /// Node storage.
    pub(crate) nodes: CompactArena<AvlNode>,
    /// Number of records currently linked into the tree.
    pub(crate) len: usize,
    pub(crate) config: StoreConfig,
}
