//! This crate exposes an insert-only AVL tree along with a layout pass that gives every node a
//! position on screen, for drawing the tree and for letting someone click on its nodes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure built out of `Node`s. Each `Node` stores a value and
//! may have a left and a right child `Node`. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! ## AVL Tree
//!
//! Inserting values in sorted order into a plain BST builds a chain whose height is the number of
//! values. An AVL tree also keeps the heights of the two subtrees of every `Node` within one of
//! each other, restoring this after each insertion with one or two "rotations" at the lowest
//! `Node` that got out of balance. That keeps the height of the tree `O(lg N)`.
//!
//! Here a leaf has height 0 and a missing subtree height -1.
//!
//! ## Layout
//!
//! [`Layout`] places each node in the middle of a horizontal band and splits the band between its
//! children one level down. [`Layout::hit_test`] goes the other way, and [`Reveals`] tracks which
//! nodes have been clicked on without storing any of that in the tree.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod layout;
pub mod reveal;
pub mod tree;
mod util;


pub use error::InvariantError;
pub use layout::Layout;
pub use reveal::{Reveals, Status};
pub use tree::{Node, Tree, EMPTY_HEIGHT};

pub use kurbo;
