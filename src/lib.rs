//! This crate exposes a plain Binary Search Tree and a self-balancing scapegoat tree built
//! on top of it.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than or equal to its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). BSTs also naturally support sorted iteration
//! by visiting the left subtree, then the subtree root, then the right subtree.
//!
//! ## Scapegoat Tree
//!
//! A plain BST fed keys in ascending order degrades into a linked list. A
//! [`ScapegoatTree`] bounds the height to `O(lg N)` without storing colors or balance
//! factors in its nodes. Instead, whenever an insert makes the tree too tall, it finds an
//! ancestor of the new node whose subtree is lopsided (the "scapegoat") and rebuilds that
//! whole subtree into a perfectly balanced one. Rebuilds are rare enough that inserts and
//! deletes cost `O(lg N)` amortized.
//!
//! Keys only need [`PartialOrd`]. Keys that can't be ordered, like `f64::NAN`, are rejected
//! with [`Error::InvalidArgument`].

#![deny(missing_docs)]

mod balance;
mod dot;
mod error;
mod node;
mod scapegoat;
mod tree;

pub use error::{Error, Result};
pub use scapegoat::ScapegoatTree;
pub use tree::Tree;
