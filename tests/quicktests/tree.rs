use scapegoat::Tree;

use std::collections::HashSet;

use crate::{apply_to_model, Op};

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut model = Vec::new();

    for op in &ops {
        let expected = apply_to_model(op, &mut model);
        match op {
            Op::Insert(k) => tree.insert(*k).unwrap(),
            Op::Remove(k) => assert_eq!(tree.delete(k), Ok(expected)),
        }
    }

    tree.inorder() == model.iter().collect::<Vec<_>>() && tree.size() == model.len()
}

#[quickcheck]
fn inorder_is_sorted(xs: Vec<i16>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x).unwrap();
    }

    tree.inorder().windows(2).all(|pair| pair[0] <= pair[1])
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x).unwrap();
    }

    xs.iter().all(|x| tree.find(x) == Ok(Some(x)))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x).unwrap();
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.contains(x) == Ok(false))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x).unwrap();
    }
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while tree.delete(delete) == Ok(true) {}
    }

    let mut still_present = xs;
    still_present.retain(|x| !deletes.contains(x));

    deletes.iter().all(|x| tree.find(x) == Ok(None))
        && still_present.iter().all(|x| tree.find(x) == Ok(Some(x)))
}

#[quickcheck]
fn balance_keeps_values_and_minimizes_height(xs: Vec<u8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x).unwrap();
    }
    let snapshot = tree.clone();
    tree.balance();

    let minimal_height = match xs.len() {
        0 => -1,
        n => n.ilog2() as isize,
    };
    tree.same_values(&snapshot) && tree.height() == minimal_height
}

#[quickcheck]
fn insertion_order_changes_shape_not_values(xs: Vec<i8>) -> bool {
    let mut forward = Tree::new();
    let mut backward = Tree::new();
    for x in &xs {
        forward.insert(*x).unwrap();
    }
    for x in xs.iter().rev() {
        backward.insert(*x).unwrap();
    }

    forward.same_values(&backward) && forward.equals(&forward)
}
