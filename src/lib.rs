//! An in-memory Binary Search Tree, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and remove stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! may have up to two child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a value takes `O(height)` (where `height` is the longest path
//! from the root `Node` to a leaf `Node`). This tree does not rebalance itself, so
//! inserting values in sorted order produces a chain whose height is the number
//! of values. Visiting the left subtree, then the subtree root, then the right
//! subtree yields the values in sorted order.
//!
//! ```
//! use dsa_bst::BinarySearchTree;
//!
//! let tree: BinarySearchTree<_> = [8, 3, 10, 1, 6, 14, 4, 7, 13].into_iter().collect();
//!
//! assert_eq!(tree.traverse_in_order(), vec![1, 3, 4, 6, 7, 8, 10, 13, 14]);
//! assert_eq!(tree.traverse_pre_order(), vec![8, 3, 1, 6, 4, 7, 10, 14, 13]);
//! assert_eq!(tree.traverse_breadth_first(), vec![8, 3, 10, 1, 6, 14, 4, 7, 13]);
//! ```

#![deny(missing_docs)]

pub mod errors;
pub mod tree;

pub use errors::InvariantError;
pub use tree::{BinarySearchTree, Node};

#[cfg(test)]
mod test;


#[cfg(test)]
pub(crate) use test_helper_tools::init_tracing;
