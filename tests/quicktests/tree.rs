use bst_engine::{Traversal, Tree};
use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same keys in both.
fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, set: &mut BTreeSet<K>)
where
    K: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                bst.insert(k.clone());
                set.insert(k.clone());
            }
            Op::InsertRecursive(k) => {
                bst.insert_recursive(k.clone());
                set.insert(k.clone());
            }
            Op::Remove(k) => {
                bst.delete(k);
                set.remove(k);
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.len() == set.len() && tree.is_valid() && tree.iter().eq(set.iter())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.search(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<i8> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.search(x))
        && still_present.iter().all(|x| tree.search(x))
        && tree.is_valid()
}

#[quickcheck]
fn deleting_missing_key_changes_nothing(xs: Vec<i8>, missing: i8) -> bool {
    let mut tree: Tree<i8> = xs.into_iter().filter(|&x| x != missing).collect();
    let before = tree.clone();

    !tree.delete(&missing) && tree == before
}

#[quickcheck]
fn clone_is_equal_and_independent(xs: Vec<i8>, extra: i8) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();
    let mut cloned = tree.clone();
    let equal_before = cloned == tree;

    let had_extra = tree.search(&extra);
    if had_extra {
        cloned.delete(&extra);
    } else {
        cloned.insert(extra);
    }

    equal_before && cloned != tree && tree.search(&extra) == had_extra
}

#[quickcheck]
fn preorder_round_trip(xs: Vec<i16>) -> bool {
    let tree: Tree<i16> = xs.into_iter().collect();

    Tree::from_preorder(tree.to_preorder()).is_ok_and(|decoded| decoded == tree)
}

#[quickcheck]
fn recursive_insert_matches_iterative(xs: Vec<i16>) -> bool {
    let mut iterative = Tree::new();
    let mut recursive = Tree::new();

    xs.iter()
        .all(|&x| iterative.insert(x) == recursive.insert_recursive(x))
        && iterative == recursive
}

#[quickcheck]
fn traversals_visit_every_key_once(xs: Vec<i16>) -> bool {
    let tree: Tree<i16> = xs.into_iter().collect();
    let sorted: Vec<i16> = tree.iter().copied().collect();

    [
        Traversal::Inorder,
        Traversal::Preorder,
        Traversal::Postorder,
        Traversal::LevelOrder,
    ]
    .into_iter()
    .all(|order| {
        let mut seen = Vec::new();
        tree.traverse(order, |key| seen.push(*key));
        seen.sort_unstable();
        seen == sorted
    })
}

#[quickcheck]
fn height_is_bounded_by_size(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.into_iter().collect();

    match tree.height() {
        None => tree.is_empty(),
        // A tree of height h holds between h + 1 and 2^(h + 1) - 1 keys.
        Some(height) => {
            height < tree.len()
                && 1usize
                    .checked_shl(height as u32 + 1)
                    .map_or(true, |capacity| capacity > tree.len())
        }
    }
}
