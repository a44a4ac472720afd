//! In-order iteration over AvlTree.
//!
//! The iterator keeps an explicit stack of node ids (the left spine still to
//! visit), so walking the tree allocates once and never recurses.

use std::iter::FusedIterator;

use crate::types::{AvlTree, NodeId, Record, NULL_NODE};

/// Iterator over records in ascending value order.
///
/// Records with equal values come out in the order insertion routed them,
/// not ordered by key.
pub struct Iter<'a> {
    tree: &'a AvlTree,
    stack: Vec<NodeId>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(tree: &'a AvlTree) -> Self {
        let mut iter = Self {
            tree,
            stack: Vec::with_capacity(tree.height().max(0) as usize),
            remaining: tree.len(),
        };
        iter.push_left_spine(tree.root);
        iter
    }

    fn push_left_spine(&mut self, mut id: NodeId) {
        while id != NULL_NODE {
            self.stack.push(id);
            id = self.tree.left_of(id);
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.tree.nodes.get(id)?;
        self.push_left_spine(node.right);
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a AvlTree {
    type Item = &'a Record;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl AvlTree {
    /// Returns an iterator over all records in ascending value order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Every record in ascending value order.
    ///
    /// Each call walks the tree afresh.
    pub fn inorder_traversal(&self) -> Vec<&Record> {
        self.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iteration_is_sorted_and_exact_size() {
        let mut tree = AvlTree::new();
        for value in [50, 20, 80, 10, 30, 70, 90, 60, 40] {
            tree.insert(Record::new(value.to_string(), value));
        }

        let iter = tree.iter();
        assert_eq!(iter.len(), 9);

        let values: Vec<i32> = iter.map(Record::value).collect();
        assert_eq!(values, [10, 20, 30, 40, 50, 60, 70, 80, 90]);

        let mut iter = tree.iter();
        iter.next();
        assert_eq!(iter.size_hint(), (8, Some(8)));
    }

    #[test]
    fn test_empty_tree_iterates_nothing() {
        let tree = AvlTree::new();
        assert!(tree.inorder_traversal().is_empty());

        let mut iter = tree.iter();
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_into_iterator_for_reference() {
        let mut tree = AvlTree::new();
        tree.insert(Record::new("b", 2));
        tree.insert(Record::new("a", 1));

        let mut keys = Vec::new();
        for record in &tree {
            keys.push(record.key());
        }
        assert_eq!(keys, ["a", "b"]);
    }
}
