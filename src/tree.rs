//! The [`Tree`] handle: the only way into a set of nodes.
//!
//! # Examples
//!
//! ```
//! use bst_engine::{Tree, TreeError};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.search(&1));
//! assert_eq!(tree.min(), Err(TreeError::EmptyTree));
//!
//! assert!(tree.insert(2));
//! assert!(tree.insert(1));
//! assert!(tree.insert(3));
//!
//! // Duplicates are rejected rather than counted.
//! assert!(!tree.insert(2));
//! assert_eq!(tree.len(), 3);
//!
//! assert!(tree.delete(&2));
//! assert_eq!(tree.iter().collect::<Vec<_>>(), [&1, &3]);
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::error::{Result, TreeError};
use crate::iter::{Iter, LevelOrder, Postorder, Preorder, Range, Traversal};
use crate::node::{self, Link, Node};
use crate::policy::BalancePolicy;

/// An unbalanced Binary Search Tree of unique keys.
///
/// Keys are kept in the order given by [`Ord`]. Nothing is ever rotated, so
/// the shape of the tree depends only on the order of insertions and
/// deletions.
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        node::release(self.root.take());
    }
}

impl<K> Clone for Tree<K>
where
    K: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: node::deep_clone(&self.root),
            len: self.len,
        }
    }
}

/// Two trees are equal when they have the same shape and the same key at
/// every position. Holding the same keys is not enough.
impl<K> PartialEq for Tree<K>
where
    K: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.root == other.root
    }
}

impl<K> Eq for Tree<K> where K: Eq {}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("root", &self.root())
            .finish()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, for callers that want to inspect the shape of the tree.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Removes every key from the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::Tree;
    ///
    /// let mut tree: Tree<i32> = (0..10).collect();
    /// tree.clear();
    ///
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.len(), 0);
    /// ```
    pub fn clear(&mut self) {
        let released = node::release(self.root.take());
        log::debug!("cleared tree, released {released} nodes");
        debug_assert_eq!(released, self.len);
        self.len = 0;
    }

    /// Number of edges on the longest path from the root to a leaf, or `None`
    /// for an empty tree. A lone root has a height of `Some(0)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), None);
    ///
    /// tree.insert(1);
    /// assert_eq!(tree.height(), Some(0));
    ///
    /// tree.insert(2);
    /// tree.insert(3);
    /// assert_eq!(tree.height(), Some(2));
    /// ```
    pub fn height(&self) -> Option<usize> {
        usize::try_from(node::height(&self.root)).ok()
    }

    /// Whether every node's subtrees differ in height by at most one.
    pub fn is_balanced(&self) -> bool {
        self.is_balanced_with(BalancePolicy::default())
    }

    /// Whether every node's subtrees differ in height by at most
    /// `policy.max_height_diff`. Each subtree height is computed once.
    pub fn is_balanced_with(&self, policy: BalancePolicy) -> bool {
        node::balanced_height(&self.root, &policy).is_some()
    }

    /// Sorted iterator over the keys. Iterating backwards yields them in
    /// descending order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.root(), self.len)
    }

    /// Iterator visiting each node before its left and then right subtree.
    pub fn preorder(&self) -> Preorder<'_, K> {
        Preorder::new(self.root())
    }

    /// Iterator visiting each node after its left and then right subtree.
    pub fn postorder(&self) -> Postorder<'_, K> {
        Postorder::new(self.root())
    }

    /// Iterator visiting the nodes depth by depth, left to right.
    pub fn level_order(&self) -> LevelOrder<'_, K> {
        LevelOrder::new(self.root())
    }

    /// Calls `visitor` with every key, in the given order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::{Traversal, Tree};
    ///
    /// let tree: Tree<i32> = [2, 1, 3].into_iter().collect();
    /// let mut seen = Vec::new();
    /// tree.traverse(Traversal::Postorder, |key| seen.push(*key));
    ///
    /// assert_eq!(seen, [1, 3, 2]);
    /// ```
    pub fn traverse(&self, order: Traversal, visitor: impl FnMut(&K)) {
        match order {
            Traversal::Inorder => self.iter().for_each(visitor),
            Traversal::Preorder => self.preorder().for_each(visitor),
            Traversal::Postorder => self.postorder().for_each(visitor),
            Traversal::LevelOrder => self.level_order().for_each(visitor),
        }
    }

    /// Removes the smallest key from the tree and returns it.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::{Tree, TreeError};
    ///
    /// let mut tree: Tree<i32> = [2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.remove_min(), Ok(1));
    /// assert_eq!(tree.remove_min(), Ok(2));
    /// assert_eq!(tree.remove_min(), Ok(3));
    /// assert_eq!(tree.remove_min(), Err(TreeError::EmptyTree));
    /// ```
    pub fn remove_min(&mut self) -> Result<K> {
        let key = node::take_min(&mut self.root).ok_or(TreeError::EmptyTree)?;
        self.len -= 1;
        Ok(key)
    }

    /// Removes the largest key from the tree and returns it.
    pub fn remove_max(&mut self) -> Result<K> {
        let key = node::take_max(&mut self.root).ok_or(TreeError::EmptyTree)?;
        self.len -= 1;
        Ok(key)
    }
}

impl<K> Tree<K>
where
    K: Ord,
{
    /// Inserts `key` into the tree, returning whether it was added. Inserting
    /// a key that is already present does nothing and returns `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> bool {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match key.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => {
                    log::debug!("rejected duplicate key");
                    return false;
                }
                Ordering::Greater => &mut node.right,
            };
        }

        *slot = Some(Node::new_boxed(key));
        self.len += 1;
        log::trace!("inserted node, tree now holds {} keys", self.len);
        true
    }

    /// Same as [`Tree::insert`] but walks down recursively, rebuilding each
    /// link on the way back up. Produces the same shape as `insert`.
    pub fn insert_recursive(&mut self, key: K) -> bool {
        let (root, inserted) = node::insert(self.root.take(), key);
        self.root = Some(root);

        if inserted {
            self.len += 1;
            log::trace!("inserted node, tree now holds {} keys", self.len);
        } else {
            log::debug!("rejected duplicate key");
        }
        inserted
    }

    /// Inserts `key`, reporting an already present key as an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::{Tree, TreeError};
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert_eq!(tree.try_insert(1), Ok(()));
    /// assert_eq!(tree.try_insert(1), Err(TreeError::DuplicateKey));
    /// ```
    pub fn try_insert(&mut self, key: K) -> Result<()> {
        if self.insert(key) {
            Ok(())
        } else {
            Err(TreeError::DuplicateKey)
        }
    }

    /// Deletes `key` from the tree, returning whether it was present.
    ///
    /// A node with two children is not unlinked. It keeps its place and takes
    /// the key of its inorder successor (the smallest key in its right
    /// subtree), whose node is removed instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::Tree;
    ///
    /// let mut tree: Tree<i32> = [2, 1, 4, 3].into_iter().collect();
    ///
    /// assert!(tree.delete(&2));
    /// assert!(!tree.delete(&2));
    ///
    /// // The successor took the root's place.
    /// assert_eq!(tree.root().map(|n| *n.key()), Some(3));
    /// ```
    pub fn delete(&mut self, key: &K) -> bool {
        match node::delete(&mut self.root, key) {
            Some(_) => {
                self.len -= 1;
                log::trace!("deleted node, tree now holds {} keys", self.len);
                true
            }
            None => {
                log::debug!("key to delete was not found");
                false
            }
        }
    }

    /// Deletes `key`, reporting a missing key as an error.
    pub fn try_delete(&mut self, key: &K) -> Result<()> {
        if self.delete(key) {
            Ok(())
        } else {
            Err(TreeError::KeyNotFound)
        }
    }

    /// Whether `key` is in the tree.
    pub fn search(&self, key: &K) -> bool {
        self.find_node(key).is_some()
    }

    /// Whether `key` is in the tree. Same as [`Tree::search`].
    pub fn contains(&self, key: &K) -> bool {
        self.search(key)
    }

    /// The node holding `key`, if any.
    pub fn find_node(&self, key: &K) -> Option<&Node<K>> {
        self.root().and_then(|root| root.find(key))
    }

    /// The smallest key in the tree.
    pub fn min(&self) -> Result<&K> {
        self.root()
            .map(|root| &root.leftmost().key)
            .ok_or(TreeError::EmptyTree)
    }

    /// The largest key in the tree.
    pub fn max(&self) -> Result<&K> {
        self.root()
            .map(|root| &root.rightmost().key)
            .ok_or(TreeError::EmptyTree)
    }

    /// Whether the ordering invariant holds: every key is strictly greater
    /// than everything in its left subtree and strictly less than everything
    /// in its right subtree.
    pub fn is_valid(&self) -> bool {
        node::is_valid(&self.root, None, None)
    }

    /// The `k`th smallest key, counting from 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::{Tree, TreeError};
    ///
    /// let tree: Tree<i32> = [20, 10, 30].into_iter().collect();
    ///
    /// assert_eq!(tree.kth_smallest(1), Ok(&10));
    /// assert_eq!(tree.kth_smallest(3), Ok(&30));
    /// assert_eq!(tree.kth_smallest(0), Err(TreeError::InvalidArgument { k: 0, len: 3 }));
    /// ```
    pub fn kth_smallest(&self, k: usize) -> Result<&K> {
        let index = self.rank_index(k)?;
        self.iter()
            .nth(index)
            .ok_or(TreeError::invalid_rank(k, self.len))
    }

    /// The `k`th largest key, counting from 1.
    pub fn kth_largest(&self, k: usize) -> Result<&K> {
        let index = self.rank_index(k)?;
        self.iter()
            .rev()
            .nth(index)
            .ok_or(TreeError::invalid_rank(k, self.len))
    }

    /// Keys in `[low, high]` in ascending order. An inverted range is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::Tree;
    ///
    /// let tree: Tree<i32> = (1..=9).collect();
    ///
    /// assert_eq!(tree.range(&3, &5).collect::<Vec<_>>(), [&3, &4, &5]);
    /// ```
    pub fn range<'a>(&'a self, low: &'a K, high: &'a K) -> Range<'a, K> {
        Range::new(self.root(), low, high)
    }

    /// Converts a 1-indexed rank into a 0-indexed position, rejecting ranks
    /// the tree can't satisfy.
    fn rank_index(&self, k: usize) -> Result<usize> {
        if self.is_empty() {
            return Err(TreeError::EmptyTree);
        }
        if k == 0 || k > self.len {
            return Err(TreeError::invalid_rank(k, self.len));
        }
        Ok(k - 1)
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: [i32; 11] = [50, 30, 70, 20, 40, 60, 80, 15, 25, 35, 45];

    fn scenario() -> Tree<i32> {
        let mut tree = Tree::new();
        for key in SCENARIO {
            assert!(tree.insert(key));
        }
        tree
    }

    fn keys(tree: &Tree<i32>) -> Vec<i32> {
        tree.iter().copied().collect()
    }

    #[test]
    fn empty_tree() {
        let tree = Tree::<i32>::new();

        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), None);
        assert!(tree.is_valid());
        assert!(tree.is_balanced());
        assert_eq!(tree.min(), Err(TreeError::EmptyTree));
        assert_eq!(tree.max(), Err(TreeError::EmptyTree));
        assert_eq!(tree.kth_smallest(1), Err(TreeError::EmptyTree));
        assert_eq!(tree.kth_largest(1), Err(TreeError::EmptyTree));
    }

    #[test]
    fn always_adding_left() {
        let mut tree = Tree::new();
        for (inserted, key) in (1..=10).rev().enumerate() {
            assert!(tree.insert(key));
            assert_eq!(tree.len(), inserted + 1);
            assert_eq!(tree.height(), Some(inserted));
            assert!(tree.is_valid());
        }
        assert_eq!(tree.min(), Ok(&1));
        assert_eq!(tree.max(), Ok(&10));
    }

    #[test]
    fn always_adding_right() {
        let mut tree = Tree::new();
        for key in 1..=10 {
            assert!(tree.insert_recursive(key));
            for inserted in 1..=key {
                assert!(tree.search(&inserted));
            }
        }
        assert_eq!(tree.height(), Some(9));
        assert!(!tree.is_balanced());
    }

    #[test]
    fn iterative_and_recursive_insert_agree() {
        let mut iterative = Tree::new();
        let mut recursive = Tree::new();
        for key in SCENARIO.into_iter().chain([45, 1, 99, 50]) {
            assert_eq!(iterative.insert(key), recursive.insert_recursive(key));
        }
        assert_eq!(iterative, recursive);
    }

    #[test]
    fn duplicates_are_rejected() {
        let mut tree = scenario();

        assert!(!tree.insert(40));
        assert!(!tree.insert_recursive(40));
        assert_eq!(tree.try_insert(40), Err(TreeError::DuplicateKey));
        assert_eq!(tree.len(), 11);
    }

    #[test]
    fn scenario_shape() {
        let tree = scenario();

        assert_eq!(tree.len(), 11);
        assert_eq!(tree.height(), Some(3));
        assert_eq!(tree.min(), Ok(&15));
        assert_eq!(tree.max(), Ok(&80));
        assert_eq!(keys(&tree), [15, 20, 25, 30, 35, 40, 45, 50, 60, 70, 80]);
        assert!(tree.is_balanced());
    }

    #[test]
    fn delete_with_no_children() {
        let mut tree = scenario();

        assert!(tree.delete(&15));
        assert!(!tree.search(&15));
        assert!(tree.find_node(&20).unwrap().left().is_none());
        assert_eq!(tree.len(), 10);
    }

    #[test]
    fn delete_with_one_child() {
        let mut tree: Tree<i32> = [50, 30, 70, 20, 40, 60, 80].into_iter().collect();
        tree.delete(&20);
        tree.insert(25);

        // 30 has 25 on its left and 40 on its right. Remove 40 so that 30 is
        // left with a single child.
        assert!(tree.delete(&40));
        assert!(tree.delete(&30));

        let root = tree.root().unwrap();
        assert_eq!(root.left().map(|n| *n.key()), Some(25));
        assert!(root.left().unwrap().is_leaf());
        assert!(tree.is_valid());
    }

    #[test]
    fn delete_with_two_children_uses_successor() {
        let mut tree = scenario();

        assert!(tree.delete(&30));

        let root = tree.root().unwrap();
        let replacement = root.left().unwrap();
        assert_eq!(replacement.key(), &35);
        assert_eq!(replacement.right().map(|n| *n.key()), Some(40));
        assert!(replacement.right().unwrap().left().is_none());
        assert_eq!(keys(&tree).iter().filter(|&&k| k == 35).count(), 1);
    }

    #[test]
    fn delete_root_with_two_children() {
        let mut tree = scenario();

        assert!(tree.delete(&50));

        assert_eq!(tree.root().map(|n| *n.key()), Some(60));
        assert!(tree.find_node(&70).unwrap().left().is_none());
        assert!(tree.is_valid());
    }

    #[test]
    fn delete_only_key() {
        let mut tree = Tree::new();
        tree.insert(5);

        assert_eq!(tree.try_delete(&5), Ok(()));
        assert!(tree.is_empty());
        assert_eq!(tree.try_delete(&5), Err(TreeError::KeyNotFound));
    }

    #[test]
    fn delete_missing_changes_nothing() {
        let mut tree = scenario();
        let before = tree.clone();

        assert!(!tree.delete(&99));
        assert_eq!(tree, before);
        assert_eq!(tree.len(), 11);
    }

    #[test]
    fn remove_extremes() {
        let mut tree = scenario();

        assert_eq!(tree.remove_max(), Ok(80));
        assert_eq!(tree.remove_min(), Ok(15));
        assert_eq!(tree.remove_min(), Ok(20));
        assert_eq!(tree.len(), 8);
        assert_eq!(tree.find_node(&25).map(|n| n.is_leaf()), Some(true));
        assert_eq!(tree.min(), Ok(&25));
        assert!(tree.is_valid());
    }

    #[test]
    fn kth_order_statistics() {
        let tree = scenario();

        assert_eq!(tree.kth_smallest(1), Ok(&15));
        assert_eq!(tree.kth_smallest(11), Ok(&80));
        assert_eq!(
            tree.kth_smallest(12),
            Err(TreeError::InvalidArgument { k: 12, len: 11 })
        );
        assert_eq!(tree.kth_largest(1), tree.max());
        assert_eq!(tree.kth_largest(11), tree.min());
        assert_eq!(tree.kth_largest(3), Ok(&60));
        assert_eq!(
            tree.kth_largest(0),
            Err(TreeError::InvalidArgument { k: 0, len: 11 })
        );
    }

    #[test]
    fn range_query() {
        let tree = scenario();

        assert_eq!(
            tree.range(&25, &75).copied().collect::<Vec<_>>(),
            [25, 30, 35, 40, 45, 50, 60, 70]
        );
    }

    #[test]
    fn balance_policies() {
        let chain: Tree<i32> = (1..=3).collect();

        assert!(!chain.is_balanced());
        assert!(chain.is_balanced_with(BalancePolicy::new(2)));
        assert!(!chain.is_balanced_with(BalancePolicy::new(0)));

        let perfect: Tree<i32> = [2, 1, 3].into_iter().collect();
        assert!(perfect.is_balanced_with(BalancePolicy::new(0)));
    }

    #[test]
    fn clone_is_independent() {
        let tree = scenario();
        let mut cloned = tree.clone();
        assert_eq!(tree, cloned);

        cloned.delete(&50);
        cloned.insert(99);

        assert_ne!(tree, cloned);
        assert!(tree.search(&50));
        assert!(!tree.search(&99));
        assert_eq!(tree.len(), 11);
    }

    #[test]
    fn equality_compares_shape() {
        let a: Tree<i32> = [2, 1, 3].into_iter().collect();
        let b: Tree<i32> = [1, 2, 3].into_iter().collect();

        assert_eq!(keys(&a), keys(&b));
        assert_ne!(a, b);
        assert_eq!(Tree::<i32>::new(), Tree::new());
    }

    #[test]
    fn clear_resets_everything() {
        let mut tree = scenario();
        tree.clear();

        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert!(tree.insert(1));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn deep_trees_clone_and_drop_without_overflow() {
        // Inserting sorted keys one by one is quadratic, so chain them up
        // directly.
        let mut root = None;
        for key in (0..100_000).rev() {
            root = Some(Box::new(Node {
                key,
                left: None,
                right: root,
            }));
        }
        let tree = Tree { root, len: 100_000 };
        assert_eq!(tree.min(), Ok(&0));

        let cloned = tree.clone();
        assert_eq!(cloned.len(), 100_000);
        assert_eq!(cloned.max(), Ok(&99_999));

        drop(tree);
        drop(cloned);
    }

    #[test]
    fn visitor_sees_every_order() {
        let tree: Tree<i32> = [4, 2, 6, 1, 3, 5, 7].into_iter().collect();
        let visit = |order| {
            let mut seen = Vec::new();
            tree.traverse(order, |key| seen.push(*key));
            seen
        };

        assert_eq!(visit(Traversal::Inorder), [1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(visit(Traversal::Preorder), [4, 2, 1, 3, 6, 5, 7]);
        assert_eq!(visit(Traversal::Postorder), [1, 3, 2, 5, 7, 6, 4]);
        assert_eq!(visit(Traversal::LevelOrder), [4, 2, 6, 1, 3, 5, 7]);
    }

    #[test]
    fn debug_shows_structure() {
        let tree: Tree<i32> = [2, 1].into_iter().collect();
        assert_eq!(
            format!("{tree:?}"),
            "Tree { len: 2, root: Some(Node { key: 2, left: Some(Node { key: 1, left: None, right: None }), right: None }) }"
        );
    }
}
