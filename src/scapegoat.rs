//! A scapegoat tree: a [`Tree`] that keeps its height logarithmic without storing any
//! balance information in its nodes.
//!
//! The tree counts insertions since its last full rebuild (`upper_bound`). When an insert
//! makes the tree taller than `log_{3/2}(upper_bound)`, it walks up from the new leaf to the
//! first ancestor whose child on that path holds more than 2/3 of its keys. That ancestor is
//! the scapegoat and its subtree is rebuilt into minimal height shape. When deletions shrink
//! the tree below half of `upper_bound`, the whole tree is rebuilt.
//!
//! # Examples
//!
//! ```
//! use scapegoat::ScapegoatTree;
//!
//! let mut tree = ScapegoatTree::new();
//!
//! // Ascending inserts would turn a plain BST into a linked list.
//! for key in 0..1000 {
//!     tree.insert(key).unwrap();
//! }
//! assert!(tree.height() <= 17);
//!
//! // All the read-only operations of `Tree` are available.
//! assert_eq!(tree.minimum(), Some(&0));
//! assert_eq!(tree.find(&500).unwrap(), Some(&500));
//!
//! assert_eq!(tree.delete(&500), Ok(true));
//! assert_eq!(tree.contains(&500), Ok(false));
//! ```

use std::ops::Deref;

use tracing::{debug, trace};

use crate::error::Result;
use crate::node::{NodeId, Slot};
use crate::tree::Tree;

/// A child may hold at most `BALANCE_NUMERATOR / BALANCE_DENOMINATOR` of its parent's keys
/// before the parent is considered a scapegoat.
const BALANCE_NUMERATOR: usize = 2;
const BALANCE_DENOMINATOR: usize = 3;

/// The tallest a tree may be after `upper_bound` insertions: `floor(log_{3/2}(upper_bound))`.
fn max_height(upper_bound: usize) -> isize {
    let base = BALANCE_DENOMINATOR as f64 / BALANCE_NUMERATOR as f64;
    ((upper_bound as f64).ln() / base.ln()).floor() as isize
}

/// A self-balancing Binary Search Tree (specifically, a scapegoat tree).
///
/// Dereferences to the underlying [`Tree`] for every read-only operation. Mutations go
/// through [`insert`][ScapegoatTree::insert], [`delete`][ScapegoatTree::delete] and
/// [`balance`][ScapegoatTree::balance] so that rebuilds are triggered when they should be.
#[derive(Clone, Debug)]
pub struct ScapegoatTree<K> {
    tree: Tree<K>,
    /// Insertions since the last full rebuild. Deletions don't decrease it so it is always at
    /// least the size of the tree.
    upper_bound: usize,
}

impl<K> Default for ScapegoatTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Deref for ScapegoatTree<K> {
    type Target = Tree<K>;

    fn deref(&self) -> &Self::Target {
        &self.tree
    }
}

impl<K> ScapegoatTree<K> {
    /// Generates a new, empty `ScapegoatTree`.
    pub fn new() -> Self {
        Self {
            tree: Tree::new(),
            upper_bound: 0,
        }
    }

    /// Insertions since the last full rebuild.
    pub fn upper_bound(&self) -> usize {
        self.upper_bound
    }

    /// Rebuilds the whole tree into minimal height shape and resets the insertion count to
    /// the current size.
    pub fn balance(&mut self) {
        self.tree.balance();
        self.upper_bound = self.tree.size();
    }

    /// Walks up from the parent of a freshly inserted leaf until it finds a node whose child
    /// on the path is too heavy. Falls back to the root if every ancestor is in balance.
    fn find_scapegoat(&self, leaf: NodeId) -> NodeId {
        let mut node = self.tree.parent(leaf).unwrap_or(leaf);
        let mut size = self.tree.subtree_size(Some(node));

        while let Some(parent) = self.tree.parent(node) {
            let sibling = match self.tree.slot_of(node) {
                Slot::Left(_) => self.tree.nodes[parent].right,
                _ => self.tree.nodes[parent].left,
            };
            let parent_size = size + 1 + self.tree.subtree_size(sibling);
            if BALANCE_DENOMINATOR * size > BALANCE_NUMERATOR * parent_size {
                return parent;
            }

            node = parent;
            size = parent_size;
        }

        node
    }

    /// Rebuilds the subtree rooted at `scapegoat` and hangs the result where the scapegoat
    /// used to be.
    fn rebuild(&mut self, scapegoat: NodeId) {
        let slot = self.tree.slot_of(scapegoat);
        let whole_tree = slot == Slot::Root;
        debug!(
            subtree_size = self.tree.subtree_size(Some(scapegoat)),
            height = self.tree.height(),
            upper_bound = self.upper_bound,
            whole_tree,
            "rebuilding scapegoat subtree"
        );

        let new_root = self.tree.rebalance_subtree(scapegoat);
        self.tree.set_slot(slot, new_root);

        if cfg!(debug_assertions) {
            assert!(self.tree.links_consistent(new_root, slot.parent()));
        }
    }
}

impl<K> ScapegoatTree<K>
where
    K: PartialOrd,
{
    /// Inserts the given key, rebuilding the scapegoat's subtree if the tree became too tall.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`][crate::Error::InvalidArgument] when the key can't be
    /// ordered. Nothing is inserted and the insertion count is unchanged.
    pub fn insert(&mut self, key: K) -> Result<()> {
        let leaf = self.tree.insert_node(key)?;
        self.upper_bound += 1;

        let height = self.tree.height();
        trace!(height, upper_bound = self.upper_bound, "inserted key");
        if height > max_height(self.upper_bound) {
            let scapegoat = self.find_scapegoat(leaf);
            self.rebuild(scapegoat);
        }

        Ok(())
    }

    /// Deletes one occurrence of `key`, rebuilding the whole tree if it has shrunk below half
    /// of the insertion count. Returns whether anything was deleted.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`][crate::Error::InvalidArgument] when the key can't be
    /// ordered.
    pub fn delete(&mut self, key: &K) -> Result<bool> {
        if !self.tree.delete(key)? {
            return Ok(false);
        }

        let size = self.tree.size();
        trace!(size, upper_bound = self.upper_bound, "deleted key");
        if 2 * size < self.upper_bound {
            debug!(
                size,
                upper_bound = self.upper_bound,
                "rebuilding whole tree after deletions"
            );
            self.balance();
        }

        Ok(true)
    }
}
