//! In-memory indexed record store backed by an AVL tree.
//!
//! Records are `(key, value)` pairs ordered by their integer `value`; the
//! string `key` only tells apart records that share a value. The tree keeps
//! its nodes in an arena and links them by id, and supports insertion,
//! exact lookup, deletion, ordered traversal, range queries and
//! k-nearest-neighbour queries by value.
//!
//! [`IndexedStore`] is a thin facade over [`AvlTree`] that adds a record count.

mod macros;

mod arena;
mod construction;
mod delete_operations;
mod error;
mod get_operations;
mod insert_operations;
mod iteration;
mod nearest;
mod range_queries;
mod rebalance;
mod store;
mod tree_structure;
mod types;
mod validation;

#[cfg(test)]
mod proptests;

pub use arena::{CompactArena, CompactArenaStats};
pub use construction::{DuplicatePolicy, StoreConfig, MAX_NODES};
pub use error::{
    AvlStoreError, InitResult, KeyResult, ModifyResult, StoreResult, StoreResultExt,
};
pub use iteration::Iter;
pub use store::IndexedStore;
pub use types::{AvlNode, AvlTree, NodeId, Record, NULL_NODE};
