//! Macros for code that exists once per side of a node.
//!
//! Left and right handling in an AVL tree are mirror images of each other.
//! These macros take the side names and let `paste` build the identifiers, so
//! both halves are generated from one body.

use crate::types::{AvlTree, NodeId, NULL_NODE};

/// Generates `<side>_of` and `set_<side>` link accessors on `AvlTree`.
macro_rules! child_links {
    ($($side:ident),+ $(,)?) => {
        paste::paste! {
            impl AvlTree {
                $(
                    /// Child id on this side, `NULL_NODE` when absent or when
                    /// `id` itself is absent.
                    #[inline]
                    pub(crate) fn [<$side _of>](&self, id: NodeId) -> NodeId {
                        self.nodes.get(id).map_or(NULL_NODE, |node| node.$side)
                    }

                    #[inline]
                    pub(crate) fn [<set_ $side>](&mut self, id: NodeId, child: NodeId) {
                        if let Some(node) = self.nodes.get_mut(id) {
                            node.$side = child;
                        }
                    }
                )+
            }
        }
    };
}

child_links!(left, right);

/// Generates a single rotation around `pivot` that promotes its `$promoted`
/// child. The promoted child's `$other` subtree crosses over to become the
/// pivot's new `$promoted` subtree. Returns the new subtree root.
///
/// Only the pivot, the promoted child and the crossing subtree are re-linked,
/// and only the pivot and promoted child get their heights recomputed.
macro_rules! mirrored_rotation {
    ($(#[$meta:meta])* $name:ident, $promoted:ident, $other:ident) => {
        paste::paste! {
            $(#[$meta])*
            pub(crate) fn $name(&mut self, pivot: NodeId) -> NodeId {
                let promoted = self.[<$promoted _of>](pivot);
                if promoted == NULL_NODE {
                    tracing::error!(
                        pivot,
                        "{} requires a {} child",
                        stringify!($name),
                        stringify!($promoted)
                    );
                    debug_assert!(false, "rotation precondition violated");
                    return pivot;
                }

                let crossing = self.[<$other _of>](promoted);
                self.[<set_ $promoted>](pivot, crossing);
                self.[<set_ $other>](promoted, pivot);

                self.update_height(pivot);
                self.update_height(promoted);

                tracing::debug!(pivot, promoted, "{}", stringify!($name));
                promoted
            }
        }
    };
}

pub(crate) use mirrored_rotation;
