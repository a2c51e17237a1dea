//! Property tests run against the public API of both trees.

#[macro_use(quickcheck)]
extern crate quickcheck_macros;

mod scapegoat;
mod tree;

use quickcheck::{Arbitrary, Gen};

/// Something to do to a tree in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<K> {
    /// Insert the K into the tree
    Insert(K),
    /// Remove one K from the tree
    Remove(K),
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(K::arbitrary(g))
        } else {
            Op::Remove(K::arbitrary(g))
        }
    }
}

/// Applies one operation to a sorted `Vec` standing in for a tree. Returns what `delete`
/// should have returned for removals.
pub fn apply_to_model<K: Ord + Clone>(op: &Op<K>, model: &mut Vec<K>) -> bool {
    match op {
        Op::Insert(k) => {
            let at = model.partition_point(|x| x <= k);
            model.insert(at, k.clone());
            true
        }
        Op::Remove(k) => match model.binary_search(k) {
            Ok(at) => {
                model.remove(at);
                true
            }
            Err(_) => false,
        },
    }
}
