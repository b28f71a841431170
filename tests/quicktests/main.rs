//! Property tests driving the public API with random operations.

mod tree;

use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<K> {
    /// Insert the K into the tree
    Insert(K),
    /// Insert the K into the tree with the recursive algorithm
    InsertRecursive(K),
    /// Remove the K from the tree
    Remove(K),
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).copied().unwrap_or(0) {
            0 => Op::Insert(K::arbitrary(g)),
            1 => Op::InsertRecursive(K::arbitrary(g)),
            _ => Op::Remove(K::arbitrary(g)),
        }
    }
}
