//! Graphviz export of a tree's shape, handy for eyeballing what a rebuild did.

use std::collections::VecDeque;
use std::fmt::Display;

use crate::tree::Tree;

impl<K> Tree<K>
where
    K: Display,
{
    /// Describes the tree in the DOT language. Nodes are visited breadth first and every
    /// missing child is drawn as a point so left and right children stay distinguishable.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2).unwrap();
    /// tree.insert(1).unwrap();
    ///
    /// let dot = tree.to_dot();
    /// assert!(dot.starts_with("digraph G {"));
    /// assert!(dot.contains("2 -> 1;"));
    /// assert!(dot.contains("2 -> node0;"));
    /// ```
    pub fn to_dot(&self) -> String {
        let mut dot = String::from("digraph G { \ngraph [ordering=\"out\"]; \n");
        let mut placeholders = 0;
        let mut queue: VecDeque<_> = self.root.into_iter().collect();

        while let Some(id) = queue.pop_front() {
            let node = &self.nodes[id];
            for child in [node.left, node.right] {
                match child {
                    Some(child) => {
                        queue.push_back(child);
                        dot.push_str(&format!("{} -> {};\n", node.key, self.nodes[child].key));
                    }
                    None => {
                        dot.push_str(&format!(
                            "node{0} [shape=point];\n{1} -> node{0};\n",
                            placeholders, node.key
                        ));
                        placeholders += 1;
                    }
                }
            }
        }

        dot.push_str("};");
        dot
    }
}
