//! Lazy traversals over a [`Tree`][crate::Tree].
//!
//! Each iterator borrows the tree and walks it with an explicit stack or
//! queue, yielding one key per step. Asking the tree for a traversal again
//! starts a fresh walk.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::node::Node;

/// The order in which [`Tree::traverse`][crate::Tree::traverse] visits keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Traversal {
    /// Left subtree, node, right subtree. Keys come out sorted.
    Inorder,
    /// Node, left subtree, right subtree.
    Preorder,
    /// Left subtree, right subtree, node.
    Postorder,
    /// Breadth first, left to right within each depth.
    LevelOrder,
}

/// Inorder (sorted) iterator over the keys of a tree. Walking it backwards
/// gives the reverse inorder.
///
/// Created by [`Tree::iter`][crate::Tree::iter].
pub struct Iter<'a, K> {
    /// Nodes whose key and right subtree are still to be yielded from the
    /// front. The top of the stack is the next smallest key.
    front: Vec<&'a Node<K>>,
    /// Mirror of `front` for the largest keys.
    back: Vec<&'a Node<K>>,
    /// Keys not yet yielded from either end. Once this hits zero the two
    /// stacks have met.
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>, len: usize) -> Self {
        let mut iter = Self {
            front: Vec::new(),
            back: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter.push_right_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Option<&'a Node<K>>) {
        while let Some(node) = link {
            self.front.push(node);
            link = node.left();
        }
    }

    fn push_right_spine(&mut self, mut link: Option<&'a Node<K>>) {
        while let Some(node) = link {
            self.back.push(node);
            link = node.right();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = self.front.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K> DoubleEndedIterator for Iter<'a, K> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = self.back.pop()?;
        self.push_right_spine(node.left());
        self.remaining -= 1;
        Some(&node.key)
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}
impl<K> FusedIterator for Iter<'_, K> {}

/// Preorder iterator over the keys of a tree.
///
/// Created by [`Tree::preorder`][crate::Tree::preorder].
pub struct Preorder<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> Preorder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for Preorder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes in first so that left comes out first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(&node.key)
    }
}

impl<K> FusedIterator for Preorder<'_, K> {}

/// Postorder iterator over the keys of a tree.
///
/// Created by [`Tree::postorder`][crate::Tree::postorder].
pub struct Postorder<'a, K> {
    /// Pending nodes, flagged with whether their children have already been
    /// pushed above them.
    stack: Vec<(&'a Node<K>, bool)>,
}

impl<'a, K> Postorder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            stack: root.into_iter().map(|node| (node, false)).collect(),
        }
    }
}

impl<'a, K> Iterator for Postorder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(&node.key);
            }

            self.stack.push((node, true));
            self.stack.extend(node.right().map(|right| (right, false)));
            self.stack.extend(node.left().map(|left| (left, false)));
        }
    }
}

impl<K> FusedIterator for Postorder<'_, K> {}

/// Breadth first iterator over the keys of a tree.
///
/// Created by [`Tree::level_order`][crate::Tree::level_order].
pub struct LevelOrder<'a, K> {
    queue: VecDeque<&'a Node<K>>,
}

impl<'a, K> LevelOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for LevelOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(&node.key)
    }
}

impl<K> FusedIterator for LevelOrder<'_, K> {}

/// Ascending iterator over the keys of a tree that lie in `[low, high]`.
/// Subtrees entirely outside of the range are never visited.
///
/// Created by [`Tree::range`][crate::Tree::range].
pub struct Range<'a, K> {
    stack: Vec<&'a Node<K>>,
    low: &'a K,
    high: &'a K,
}

impl<'a, K> Range<'a, K>
where
    K: Ord,
{
    pub(crate) fn new(root: Option<&'a Node<K>>, low: &'a K, high: &'a K) -> Self {
        let mut range = Self {
            stack: Vec::new(),
            low,
            high,
        };
        if low <= high {
            range.seek(root);
        }
        range
    }

    /// Pushes the path to the smallest key `>= low` in `link`, skipping every
    /// node (and left subtree) below `low`.
    fn seek(&mut self, mut link: Option<&'a Node<K>>) {
        while let Some(node) = link {
            if node.key < *self.low {
                link = node.right();
            } else {
                self.stack.push(node);
                link = if node.key > *self.low {
                    node.left()
                } else {
                    None
                };
            }
        }
    }
}

impl<'a, K> Iterator for Range<'a, K>
where
    K: Ord,
{
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if node.key > *self.high {
            // Everything left on the stack is larger still.
            self.stack.clear();
            return None;
        }

        if node.key < *self.high {
            self.seek(node.right());
        }
        Some(&node.key)
    }
}

impl<K> FusedIterator for Range<'_, K> where K: Ord {}
