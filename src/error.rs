//! The error reported when a [`Tree`][crate::Tree] is found to break one of its invariants.

use std::fmt;

/// An invariant of an AVL tree that [`Tree::check`][crate::Tree::check] found broken. Insertion
/// maintains all of these so seeing one of them means there is a bug in the tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantError<K> {
    /// A child is on the wrong side of its parent.
    Unordered {
        /// The value of the parent node.
        parent: K,
        /// The value of the misplaced node somewhere under `parent`.
        child: K,
    },
    /// The subtrees of a node differ in height by more than one.
    Unbalanced {
        /// The value of the unbalanced node.
        value: K,
        /// Height of the left subtree (-1 when absent).
        left_height: isize,
        /// Height of the right subtree (-1 when absent).
        right_height: isize,
    },
    /// A node's cached height doesn't match its children.
    StaleHeight {
        /// The value of the node with the stale height.
        value: K,
        /// The height stored in the node.
        cached: isize,
        /// The height computed from the node's children.
        actual: isize,
    },
}

impl<K> fmt::Display for InvariantError<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unordered { parent, child } => {
                write!(f, "{child:?} is on the wrong side of {parent:?}")
            }
            Self::Unbalanced {
                value,
                left_height,
                right_height,
            } => write!(
                f,
                "node {value:?} is unbalanced (left height {left_height}, right height {right_height})"
            ),
            Self::StaleHeight {
                value,
                cached,
                actual,
            } => write!(
                f,
                "node {value:?} caches height {cached} but its children give {actual}"
            ),
        }
    }
}

impl<K> std::error::Error for InvariantError<K> where K: fmt::Debug {}
