//! Errors reported by [`Tree`][crate::Tree] operations.
//!
//! None of these are fatal. An operation that returns an error leaves the
//! tree exactly as it was before the call.

/// Everything that can go wrong when operating on a [`Tree`][crate::Tree].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// The key being inserted is already in the tree.
    #[error("key is already present in the tree")]
    DuplicateKey,

    /// The key being deleted is not in the tree.
    #[error("key is not present in the tree")]
    KeyNotFound,

    /// The query needs at least one node but the tree is empty.
    #[error("tree is empty")]
    EmptyTree,

    /// A rank was requested outside of `1..=len`.
    #[error("rank {k} is out of range for a tree with {len} nodes")]
    InvalidArgument {
        /// The requested 1-indexed rank.
        k: usize,
        /// How many nodes the tree held at the time.
        len: usize,
    },
}

impl TreeError {
    /// Creates an [`InvalidArgument`][Self::InvalidArgument] error for rank `k`.
    pub fn invalid_rank(k: usize, len: usize) -> Self {
        Self::InvalidArgument { k, len }
    }
}

/// Shorthand for results carrying a [`TreeError`].
pub type Result<T, E = TreeError> = std::result::Result<T, E>;
