//! Nodes and the recursive algorithms that walk them.
//!
//! Every child is a [`Box`] owned by exactly one parent, so a subtree can only
//! be reached through a single path and is released exactly once.

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use crate::policy::BalancePolicy;

/// An owning reference to a subtree. `None` marks an empty position.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A single key in a [`Tree`][crate::Tree] along with the two subtrees
/// hanging off of it.
///
/// Nodes can only be created by inserting into a tree. They are exposed read
/// only so that callers can inspect the shape of a tree (e.g. to draw it).
///
/// # Examples
///
/// ```
/// use bst_engine::Tree;
///
/// let tree: Tree<i32> = [2, 1, 3].into_iter().collect();
/// let root = tree.root().unwrap();
///
/// assert_eq!(root.key(), &2);
/// assert_eq!(root.left().map(|n| *n.key()), Some(1));
/// assert_eq!(root.right().map(|n| *n.key()), Some(3));
/// assert!(root.left().unwrap().is_leaf());
/// ```
#[derive(PartialEq, Eq)]
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> fmt::Debug for Node<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("left", &self.left())
            .field("right", &self.right())
            .finish()
    }
}

impl<K> Node<K> {
    pub(crate) fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The root of the left subtree, if there is one.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if there is one.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Finds the node holding `key` in this subtree by walking down from
    /// `self`.
    pub(crate) fn find(&self, key: &K) -> Option<&Self>
    where
        K: Ord,
    {
        let mut current = Some(self);
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// The node with the smallest key in this subtree.
    pub(crate) fn leftmost(&self) -> &Self {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        node
    }

    /// The node with the largest key in this subtree.
    pub(crate) fn rightmost(&self) -> &Self {
        let mut node = self;
        while let Some(right) = node.right() {
            node = right;
        }
        node
    }
}

/// Inserts `key` into the subtree `link`, handing back the rebuilt subtree
/// and whether a node was created. Each level takes its child, recurses into
/// it and stores whatever comes back.
pub(crate) fn insert<K>(link: Link<K>, key: K) -> (Box<Node<K>>, bool)
where
    K: Ord,
{
    let Some(mut node) = link else {
        return (Node::new_boxed(key), true);
    };

    let inserted = match key.cmp(&node.key) {
        Ordering::Less => {
            let (left, inserted) = insert(node.left.take(), key);
            node.left = Some(left);
            inserted
        }
        Ordering::Equal => false,
        Ordering::Greater => {
            let (right, inserted) = insert(node.right.take(), key);
            node.right = Some(right);
            inserted
        }
    };

    (node, inserted)
}

/// Deletes the node with `key` from the subtree `link` and returns the key
/// it held.
pub(crate) fn delete<K>(link: &mut Link<K>, key: &K) -> Option<K>
where
    K: Ord,
{
    let node = link.as_mut()?;
    match key.cmp(&node.key) {
        Ordering::Less => delete(&mut node.left, key),
        Ordering::Greater => delete(&mut node.right, key),
        Ordering::Equal => unlink(link),
    }
}

/// Removes the node at the top of `link` and returns its key.
///
/// A node with at most one child is replaced by that child. A node with two
/// children stays where it is and takes over the key of its inorder
/// successor, whose own node is then removed from the right subtree.
fn unlink<K>(link: &mut Link<K>) -> Option<K> {
    let node = link.as_mut()?;
    if node.left.is_some() && node.right.is_some() {
        // The leftmost node of a non-empty subtree always exists.
        let successor = take_min(&mut node.right)?;
        log::trace!("promoting inorder successor into a node with two children");
        return Some(mem::replace(&mut node.key, successor));
    }

    let mut node = link.take()?;
    *link = node.left.take().or_else(|| node.right.take());
    Some(node.key)
}

/// Detaches the leftmost node of `link`, splicing its right child into its
/// place, and returns its key.
pub(crate) fn take_min<K>(link: &mut Link<K>) -> Option<K> {
    let node = link.as_mut()?;
    if node.left.is_some() {
        return take_min(&mut node.left);
    }

    let mut node = link.take()?;
    *link = node.right.take();
    Some(node.key)
}

/// Detaches the rightmost node of `link`, splicing its left child into its
/// place, and returns its key.
pub(crate) fn take_max<K>(link: &mut Link<K>) -> Option<K> {
    let node = link.as_mut()?;
    if node.right.is_some() {
        return take_max(&mut node.right);
    }

    let mut node = link.take()?;
    *link = node.left.take();
    Some(node.key)
}

/// Number of edges on the longest path down from `link`. An empty subtree has
/// a height of `-1`.
pub(crate) fn height<K>(link: &Link<K>) -> isize {
    match link {
        None => -1,
        Some(node) => 1 + height(&node.left).max(height(&node.right)),
    }
}

/// Checks the ordering invariant with every key strictly inside
/// `(low, high)`. `None` leaves that side unbounded.
pub(crate) fn is_valid<K>(link: &Link<K>, low: Option<&K>, high: Option<&K>) -> bool
where
    K: Ord,
{
    let Some(node) = link else {
        return true;
    };

    if low.is_some_and(|low| node.key <= *low) || high.is_some_and(|high| node.key >= *high) {
        return false;
    }

    is_valid(&node.left, low, Some(&node.key)) && is_valid(&node.right, Some(&node.key), high)
}

/// Height of `link` if every node in it satisfies `policy`, otherwise `None`.
/// Stops at the first offending subtree.
pub(crate) fn balanced_height<K>(link: &Link<K>, policy: &BalancePolicy) -> Option<isize> {
    let Some(node) = link else {
        return Some(-1);
    };

    let left = balanced_height(&node.left, policy)?;
    let right = balanced_height(&node.right, policy)?;
    policy.allows(left, right).then_some(1 + left.max(right))
}

/// Deep copies `link`, building each node after both of its children.
/// Uses heap allocated stacks so degenerate trees can't overflow the call
/// stack.
pub(crate) fn deep_clone<K>(link: &Link<K>) -> Link<K>
where
    K: Clone,
{
    let mut pending = vec![(link.as_deref(), false)];
    let mut built: Vec<Link<K>> = Vec::new();

    while let Some((source, expanded)) = pending.pop() {
        match source {
            None => built.push(None),
            Some(node) if !expanded => {
                pending.push((Some(node), true));
                pending.push((node.right(), false));
                pending.push((node.left(), false));
            }
            Some(node) => {
                // The right subtree was finished last so it's on top.
                let right = built.pop().flatten();
                let left = built.pop().flatten();
                built.push(Some(Box::new(Node {
                    key: node.key.clone(),
                    left,
                    right,
                })));
            }
        }
    }

    built.pop().flatten()
}

/// Releases every node in `link`, children before their parent, and returns
/// how many were released. Uses a heap allocated stack so degenerate trees
/// can't overflow the call stack.
pub(crate) fn release<K>(link: Link<K>) -> usize {
    let mut released = 0;
    let mut stack: Vec<Box<Node<K>>> = link.into_iter().collect();

    while let Some(mut node) = stack.pop() {
        match node.left.take().or_else(|| node.right.take()) {
            Some(child) => {
                stack.push(node);
                stack.push(child);
            }
            None => {
                drop(node);
                released += 1;
            }
        }
    }

    released
}
