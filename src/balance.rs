//! Rebuilding subtrees into minimal height shape.
//!
//! A subtree is flattened into its sorted keys (freeing its nodes) and then rebuilt by
//! repeatedly picking the middle key as the root. `n` keys come back with a height of
//! `floor(log2(n))`.

use crate::node::{Node, NodeId, Slot};
use crate::tree::Tree;

impl<K> Tree<K> {
    /// Rebuilds the whole tree into minimal height shape. The keys and their order are
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in 'a'..='g' {
    ///     tree.insert(key).unwrap();
    /// }
    /// assert_eq!(tree.height(), 6);
    /// assert!(!tree.is_balanced());
    ///
    /// tree.balance();
    /// assert_eq!(tree.height(), 2);
    /// assert!(tree.is_balanced());
    /// ```
    pub fn balance(&mut self) {
        if let Some(root) = self.root {
            let new_root = self.rebalance_subtree(root);
            self.set_slot(Slot::Root, new_root);
        }
    }

    /// Replaces the subtree rooted at `id` with a minimal height subtree over the same keys
    /// and returns its root. The returned root still has to be attached: its parent link is
    /// `None` and whatever pointed at `id` still does.
    pub(crate) fn rebalance_subtree(&mut self, id: NodeId) -> Option<NodeId> {
        let mut keys = Vec::new();
        self.drain_inorder(Some(id), &mut keys);
        let count = keys.len();
        self.build_balanced(&mut keys.into_iter(), count)
    }

    /// Frees every node under `node`, pushing their keys in order.
    fn drain_inorder(&mut self, node: Option<NodeId>, keys: &mut Vec<K>) {
        if let Some(id) = node {
            let node = self.nodes.remove(id);
            self.drain_inorder(node.left, keys);
            keys.push(node.key);
            self.drain_inorder(node.right, keys);
        }
    }

    /// Builds a subtree over the next `count` keys. The subtree root is the key at index
    /// `(count - 1) / 2`, which is built after its left half so the keys can be consumed in
    /// order.
    fn build_balanced(&mut self, keys: &mut impl Iterator<Item = K>, count: usize) -> Option<NodeId> {
        if count == 0 {
            return None;
        }
        let left_count = (count - 1) / 2;
        let left = self.build_balanced(keys, left_count);
        let id = self.nodes.insert(Node::new(keys.next()?, None));
        let right = self.build_balanced(keys, count - 1 - left_count);

        self.set_slot(Slot::Left(id), left);
        self.set_slot(Slot::Right(id), right);
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_of<K: PartialOrd>(keys: impl IntoIterator<Item = K>) -> Tree<K> {
        let mut tree = Tree::new();
        for key in keys {
            tree.insert(key).unwrap();
        }
        tree
    }

    #[test]
    fn balance_picks_midpoints() {
        let mut tree = tree_of(1..=7);
        tree.balance();

        assert_eq!(tree.preorder(), [&4, &2, &1, &3, &6, &5, &7]);
        assert!(tree.links_consistent(tree.root, None));
        assert_eq!(tree.nodes.len(), 7);
    }

    #[test]
    fn even_counts_lean_right() {
        let mut tree = tree_of(1..=2);
        tree.balance();
        assert_eq!(tree.preorder(), [&1, &2]);

        let mut tree = tree_of(1..=4);
        tree.balance();
        assert_eq!(tree.preorder(), [&2, &1, &3, &4]);
    }

    #[test]
    fn balanced_height_is_floor_log2() {
        for n in 1..=100u32 {
            let mut tree = tree_of(0..n);
            tree.balance();

            assert_eq!(tree.height(), n.ilog2() as isize, "n = {}", n);
            assert!(tree.is_balanced());
            let expected: Vec<u32> = (0..n).collect();
            assert_eq!(tree.inorder(), expected.iter().collect::<Vec<_>>());
        }
    }

    #[test]
    fn balance_is_idempotent() {
        let mut tree = tree_of(['d', 'b', 'a', 'c', 'f', 'e', 'g']);
        let snapshot = tree.clone();

        tree.balance();
        assert!(tree.same_values(&snapshot));
        assert!(tree.equals(&snapshot));
        assert_eq!(tree.height(), 2);

        tree.balance();
        assert!(tree.equals(&snapshot));
    }

    #[test]
    fn balance_empty_tree() {
        let mut tree: Tree<u8> = Tree::new();
        tree.balance();
        assert!(tree.is_empty());
    }

    #[test]
    fn rebalance_subtree_leaves_root_unattached() {
        let mut tree = tree_of([0, 1, 2, 3, 4]);
        let root = tree.root.unwrap();
        let child = tree.nodes[root].right.unwrap();

        let new_child = tree.rebalance_subtree(child).unwrap();
        assert_eq!(tree.parent(new_child), None);
        assert_eq!(tree.nodes[new_child].key, 2);

        tree.set_slot(Slot::Right(root), Some(new_child));
        assert_eq!(tree.preorder(), [&0, &2, &1, &3, &4]);
        assert!(tree.links_consistent(tree.root, None));
        assert_eq!(tree.nodes.len(), 5);
    }
}
