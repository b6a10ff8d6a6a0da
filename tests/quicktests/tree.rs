use clowder::{InOrderVisitor, Tree};

use std::collections::BTreeSet;

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// we have the same elements, in the same order, in both. Every snapshot
/// is returned with the set it should still match.
fn do_ops<T>(
    ops: &[Op<T>],
    mut bst: Tree<T>,
    set: &mut BTreeSet<T>,
) -> Vec<(Tree<T>, BTreeSet<T>)>
where
    T: Clone + Ord,
{
    let mut snapshots = Vec::new();
    for op in ops {
        match op {
            Op::Insert(x) => {
                bst = bst.insert(x.clone());
                set.insert(x.clone());
            }
            Op::Iter => {
                assert!(bst.iter().eq(set.iter()));
            }
            Op::Snapshot => snapshots.push((bst.clone(), set.clone())),
        }
    }

    snapshots.push((bst, set.clone()));
    snapshots
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut set = BTreeSet::new();

    let snapshots = do_ops(&ops, Tree::new(), &mut set);
    snapshots
        .iter()
        .all(|(tree, set)| tree.iter().eq(set.iter()) && tree.size() == set.len())
}

#[quickcheck]
fn strictly_ascending(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let elements = tree.iter().collect::<Vec<_>>();

    elements.windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn size_counts_distinct(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let distinct: BTreeSet<_> = xs.into_iter().collect();

    tree.size() == distinct.len() && tree.iter().count() == distinct.len()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.find(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: BTreeSet<_> = xs.into_iter().collect();
    let nots: BTreeSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn duplicate_keeps_shape(xs: Vec<u8>, dup: usize) -> bool {
    if xs.is_empty() {
        return true;
    }
    let tree: Tree<_> = xs.iter().copied().collect();
    let same = tree.insert(xs[dup % xs.len()]);

    std::ptr::eq(tree.left(), same.left())
        && std::ptr::eq(tree.right(), same.right())
        && tree.accept(&mut InOrderVisitor) == same.accept(&mut InOrderVisitor)
}

#[quickcheck]
fn in_order_visitor_matches_iter(xs: Vec<u8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let rendered = tree.iter().map(u8::to_string).collect::<String>();

    tree.accept(&mut InOrderVisitor) == rendered
}
