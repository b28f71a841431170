//! Linear encoding of a [`Tree`].
//!
//! A tree is encoded as its keys in preorder. Inserting those keys one by one
//! into an empty tree puts every key back at the position it came from, so the
//! encoding is enough to rebuild the exact shape.
//!
//! With the `serde` feature enabled, [`Tree`] serializes as that sequence.

use crate::error::Result;
use crate::tree::Tree;

impl<K> Tree<K> {
    /// The keys of the tree in preorder.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::Tree;
    ///
    /// let tree: Tree<i32> = [2, 3, 1].into_iter().collect();
    ///
    /// assert_eq!(tree.to_preorder(), [2, 1, 3]);
    /// assert_eq!(Tree::from_preorder(tree.to_preorder()), Ok(tree));
    /// ```
    pub fn to_preorder(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.preorder().cloned().collect()
    }

    /// Rebuilds a tree from keys produced by [`Tree::to_preorder`]. A
    /// repeated key means the input did not come from a tree and is rejected.
    pub fn from_preorder<I>(keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = K>,
        K: Ord,
    {
        let mut tree = Self::new();
        for key in keys {
            tree.try_insert(key)?;
        }
        log::trace!("decoded tree with {} keys", tree.len());
        Ok(tree)
    }
}

/// Collecting skips duplicate keys, the same way [`Tree::insert`] does.
impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

#[cfg(feature = "serde")]
impl<K> serde::Serialize for Tree<K>
where
    K: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.preorder())
    }
}

#[cfg(feature = "serde")]
impl<'de, K> serde::Deserialize<'de> for Tree<K>
where
    K: serde::Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let keys = <Vec<K> as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_preorder(keys).map_err(serde::de::Error::custom)
    }
}
