/// How strictly [`Tree::is_balanced_with`][crate::Tree::is_balanced_with] judges a tree.
///
/// A tree is balanced under a policy when, for every node, the heights of its
/// left and right subtrees differ by at most `max_height_diff`. The default
/// is the classic AVL criterion of 1.
///
/// # Examples
///
/// ```
/// use bst_engine::{BalancePolicy, Tree};
///
/// let tree: Tree<i32> = (1..=3).collect();
///
/// assert!(!tree.is_balanced_with(BalancePolicy::default()));
/// assert!(tree.is_balanced_with(BalancePolicy::new(2)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BalancePolicy {
    /// Largest tolerated height difference between sibling subtrees.
    pub max_height_diff: usize,
}

impl BalancePolicy {
    /// The AVL criterion.
    pub const AVL: Self = Self::new(1);

    /// Creates a policy tolerating the given height difference.
    pub const fn new(max_height_diff: usize) -> Self {
        Self { max_height_diff }
    }

    /// Whether two sibling heights satisfy this policy. Heights use `-1` for
    /// an absent subtree.
    pub(crate) fn allows(&self, left: isize, right: isize) -> bool {
        left.abs_diff(right) <= self.max_height_diff
    }
}

impl Default for BalancePolicy {
    fn default() -> Self {
        Self::AVL
    }
}
