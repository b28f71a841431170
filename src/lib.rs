//! This crate exposes a plain, unbalanced Binary Search Tree (BST) over
//! unique keys along with the usual queries one runs against it.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! will sometimes have child `Node`s. The most important invariants of a BST
//! are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)` (where `height` is the number of
//! edges on the longest path from the root `Node` to a leaf `Node`). This tree
//! never rebalances itself, so inserting sorted keys produces a tree whose
//! height is one less than its size. BSTs also naturally support sorted
//! iteration by visiting the left subtree, then the subtree root, then the
//! right subtree.
//!
//! # Examples
//!
//! ```
//! use bst_engine::{Traversal, Tree, TreeError};
//!
//! let mut tree = Tree::new();
//! for key in [50, 30, 70, 20, 40, 60, 80] {
//!     tree.insert(key);
//! }
//!
//! assert_eq!(tree.len(), 7);
//! assert_eq!(tree.height(), Some(2));
//! assert_eq!(tree.kth_smallest(2), Ok(&30));
//! assert_eq!(tree.range(&35, &65).collect::<Vec<_>>(), [&40, &50, &60]);
//!
//! let mut level_order = Vec::new();
//! tree.traverse(Traversal::LevelOrder, |key| level_order.push(*key));
//! assert_eq!(level_order, [50, 30, 70, 20, 40, 60, 80]);
//!
//! assert!(tree.delete(&50));
//! assert!(tree.is_valid());
//! assert_eq!(tree.kth_smallest(7), Err(TreeError::InvalidArgument { k: 7, len: 6 }));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod codec;
pub mod error;
pub mod iter;
mod node;
mod policy;
mod tree;


pub use error::{Result, TreeError};
pub use iter::Traversal;
pub use node::Node;
pub use policy::BalancePolicy;
pub use tree::Tree;
