//! Errors reported when a tree's structure is checked.

use thiserror::Error;

/// A violation of the ordering invariant found by
/// [`BinarySearchTree::validate`][crate::BinarySearchTree::validate].
///
/// Positions are zero-based indices into the in-order traversal of the tree.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantError {
    /// The value at `position` is smaller than the value visited before it.
    #[error("value at in-order position {position} is smaller than its predecessor")]
    OutOfOrder {
        /// In-order position of the offending value.
        position: usize,
    },
    /// The value at `position` is equal to the value visited before it.
    #[error("value at in-order position {position} duplicates its predecessor")]
    Duplicate {
        /// In-order position of the offending value.
        position: usize,
    },
}
