//! Construction and configuration for `AvlTree`.
//!
//! This module holds the store configuration, its validation, and the
//! constructors and `Default` implementations built on top of it.

use crate::arena::CompactArena;
use crate::error::{AvlStoreError, InitResult};
use crate::types::{AvlTree, NULL_NODE};

/// Largest number of nodes addressable by a `NodeId`; the last id is the
/// null sentinel.
pub const MAX_NODES: usize = NULL_NODE as usize;

/// What `insert` does with a record whose `(key, value)` is already stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Link the record in as a distinct node.
    #[default]
    Allow,
    /// Leave the tree unchanged and report the refusal.
    Reject,
}

/// Settings for a tree or store.
///
/// # Examples
///
/// ```
/// use avlstore::{AvlTree, DuplicatePolicy, Record, StoreConfig};
///
/// let config = StoreConfig::new()
///     .duplicate_policy(DuplicatePolicy::Reject)
///     .initial_capacity(64);
/// let mut tree = AvlTree::with_config(config).unwrap();
///
/// assert!(tree.insert(Record::new("a", 1)));
/// assert!(!tree.insert(Record::new("a", 1)));
/// assert_eq!(tree.len(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreConfig {
    pub duplicate_policy: DuplicatePolicy,
    /// Node slots reserved up front.
    pub initial_capacity: usize,
}

impl StoreConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Check the configuration before a tree is built from it.
    pub fn validate(&self) -> InitResult<()> {
        if self.initial_capacity >= MAX_NODES {
            return Err(AvlStoreError::invalid_config(
                "initial_capacity",
                &format!(
                    "{} exceeds the node id space ({} slots)",
                    self.initial_capacity,
                    MAX_NODES - 1
                ),
            ));
        }
        Ok(())
    }
}

impl AvlTree {
    /// Create an empty tree with the default configuration.
    pub fn new() -> Self {
        Self::from_valid_config(StoreConfig::default())
    }

    /// Create an empty tree after validating `config`.
    pub fn with_config(config: StoreConfig) -> InitResult<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: StoreConfig) -> Self {
        Self {
            root: NULL_NODE,
            nodes: CompactArena::with_capacity(config.initial_capacity),
            len: 0,
            config,
        }
    }

    /// The configuration this tree was built with.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }
}

impl Default for AvlTree {
    fn default() -> Self {
        Self::new()
    }
}
