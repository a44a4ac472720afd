//! Indexed record store.
//!
//! `IndexedStore` owns one [`AvlTree`] and forwards every call to it; it adds
//! no logic of its own beyond naming.

use crate::construction::StoreConfig;
use crate::error::{InitResult, KeyResult, ModifyResult};
use crate::iteration::Iter;
use crate::types::{AvlTree, Record};

/// A record store indexed by an AVL tree on [`Record::value`].
///
/// # Examples
///
/// ```
/// use avlstore::{IndexedStore, Record};
///
/// let mut store = IndexedStore::new();
/// store.insert(Record::new("a", 10));
/// store.insert(Record::new("b", 20));
/// store.insert(Record::new("c", 30));
///
/// assert_eq!(store.count_records(), 3);
/// assert!(store.search("b", 20).is_some());
///
/// store.delete_record("b", 20);
/// assert!(store.search("b", 20).is_none());
/// assert_eq!(store.count_records(), 2);
/// ```
#[derive(Debug, Default)]
pub struct IndexedStore {
    index: AvlTree,
}

impl IndexedStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: StoreConfig) -> InitResult<Self> {
        Ok(Self {
            index: AvlTree::with_config(config)?,
        })
    }

    /// Returns `true` when the record was stored.
    pub fn insert(&mut self, record: Record) -> bool {
        self.index.insert(record)
    }

    pub fn try_insert(&mut self, record: Record) -> ModifyResult<()> {
        self.index.try_insert(record)
    }

    pub fn search(&self, key: &str, value: i32) -> Option<&Record> {
        self.index.search(key, value)
    }

    pub fn search_item(&self, key: &str, value: i32) -> KeyResult<&Record> {
        self.index.search_item(key, value)
    }

    /// Removes the record if present; a miss leaves the store untouched.
    pub fn delete_record(&mut self, key: &str, value: i32) -> Option<Record> {
        self.index.delete_node(key, value)
    }

    pub fn try_delete_record(&mut self, key: &str, value: i32) -> ModifyResult<Record> {
        self.index.try_delete(key, value)
    }

    pub fn range_query(&self, start: i32, end: i32) -> Vec<&Record> {
        self.index.range_query(start, end)
    }

    pub fn find_k_nearest_keys(&self, value: i32, k: usize) -> Vec<&Record> {
        self.index.find_k_nearest_keys(value, k)
    }

    pub fn inorder_traversal(&self) -> Vec<&Record> {
        self.index.inorder_traversal()
    }

    pub fn iter(&self) -> Iter<'_> {
        self.index.iter()
    }

    pub fn clear_database(&mut self) {
        self.index.clear();
    }

    pub fn count_records(&self) -> usize {
        self.index.len()
    }

    /// The underlying index, for inspection.
    pub fn index(&self) -> &AvlTree {
        &self.index
    }
}

impl Extend<Record> for IndexedStore {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        for record in iter {
            self.insert(record);
        }
    }
}

impl FromIterator<Record> for IndexedStore {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}
