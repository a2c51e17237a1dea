use scapegoat::{ScapegoatTree, Tree};

use crate::{apply_to_model, Op};

/// `floor(log_{3/2}(n))`, the tallest a scapegoat tree may be after `n` inserts.
fn height_bound(n: usize) -> isize {
    ((n as f64).ln() / 1.5f64.ln()).floor() as isize
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = ScapegoatTree::new();
    let mut model = Vec::new();

    for op in &ops {
        let expected = apply_to_model(op, &mut model);
        match op {
            Op::Insert(k) => tree.insert(*k).unwrap(),
            Op::Remove(k) => assert_eq!(tree.delete(k), Ok(expected)),
        }
        assert!(tree.upper_bound() >= tree.size());
        assert!(tree.height() <= height_bound(tree.upper_bound().max(1)));
    }

    tree.inorder() == model.iter().collect::<Vec<_>>()
}

#[quickcheck]
fn height_bound_after_every_insert(xs: Vec<i32>) -> bool {
    let mut tree = ScapegoatTree::new();
    xs.iter().enumerate().all(|(count, x)| {
        tree.insert(*x).unwrap();
        tree.height() <= height_bound(count + 1)
    })
}

#[quickcheck]
fn sorted_inserts_stay_short(len: u8) -> bool {
    let mut tree = ScapegoatTree::new();
    (0..len).all(|x| {
        tree.insert(x).unwrap();
        tree.height() <= height_bound(usize::from(x) + 1)
    })
}

#[quickcheck]
fn holds_same_values_as_plain_tree(xs: Vec<i16>) -> bool {
    let mut plain = Tree::new();
    let mut scapegoat = ScapegoatTree::new();
    for x in &xs {
        plain.insert(*x).unwrap();
        scapegoat.insert(*x).unwrap();
    }

    scapegoat.same_values(&plain) && plain.same_values(&scapegoat)
}
