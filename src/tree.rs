//! A plain (unbalanced) BST. Nodes live in an arena and know their parent, which is what the
//! [`ScapegoatTree`][crate::ScapegoatTree] needs to walk back up from a freshly inserted leaf.
//!
//! Equal keys are allowed. They are routed to the left on insertion so the tree behaves as a
//! multiset.
//!
//! # Examples
//!
//! ```
//! use scapegoat::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&'d').unwrap(), None);
//!
//! for key in ['d', 'b', 'a', 'c', 'f', 'e', 'g'] {
//!     tree.insert(key).unwrap();
//! }
//! assert_eq!(tree.find(&'d').unwrap(), Some(&'d'));
//!
//! let inorder: String = tree.inorder().into_iter().collect();
//! assert_eq!(inorder, "abcdefg");
//!
//! // Deleting reports whether anything was there to delete.
//! assert_eq!(tree.delete(&'a'), Ok(true));
//! assert_eq!(tree.delete(&'z'), Ok(false));
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::error::{Error, Result};
use crate::node::{Arena, Node, NodeId, Slot};

/// A Binary Search Tree storing keys. This can be used for inserting, finding, and deleting
/// keys as well as walking them in pre-, in-, and post-order.
///
/// Sizes and heights aren't cached, so [`size`][Tree::size] and [`height`][Tree::height]
/// walk the whole tree on every call.
#[derive(Clone)]
pub struct Tree<K> {
    pub(crate) nodes: Arena<K>,
    pub(crate) root: Option<NodeId>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("root", &self.root.map(|id| NodeRef { tree: self, id }))
            .finish()
    }
}

/// Borrowed view of a node used to print the tree shape recursively.
struct NodeRef<'a, K> {
    tree: &'a Tree<K>,
    id: NodeId,
}

impl<K> fmt::Debug for NodeRef<'_, K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = &self.tree.nodes[self.id];
        let child = |id: Option<NodeId>| id.map(|id| NodeRef { tree: self.tree, id });
        f.debug_struct("Node")
            .field("key", &node.key)
            .field("left", &child(node.left))
            .field("right", &child(node.right))
            .finish()
    }
}

/// Rejects keys that don't have a place in a total order (`NaN` and friends).
pub(crate) fn validate<K: PartialOrd>(key: &K) -> Result<()> {
    match key.partial_cmp(key) {
        Some(Ordering::Equal) => Ok(()),
        _ => Err(Error::InvalidArgument("key is not comparable with itself")),
    }
}

fn compare<K: PartialOrd>(a: &K, b: &K) -> Result<Ordering> {
    a.partial_cmp(b)
        .ok_or(Error::InvalidArgument("keys are not comparable with each other"))
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Counts the keys in the tree, duplicates included.
    pub fn size(&self) -> usize {
        self.subtree_size(self.root)
    }

    /// Number of edges on the longest path from the root to a leaf. A single node has height
    /// `0` and the empty tree has height `-1`.
    pub fn height(&self) -> isize {
        self.subtree_height(self.root)
    }

    /// The smallest key, or `None` for an empty tree.
    pub fn minimum(&self) -> Option<&K> {
        self.root.map(|root| &self.nodes[self.leftmost(root)].key)
    }

    /// The largest key, or `None` for an empty tree.
    pub fn maximum(&self) -> Option<&K> {
        self.root.map(|root| &self.nodes[self.rightmost(root)].key)
    }

    /// Keys in node-left-right order.
    pub fn preorder(&self) -> Vec<&K> {
        let mut keys = Vec::new();
        self.preorder_from(self.root, &mut keys);
        keys
    }

    /// Keys in left-node-right order, i.e. sorted.
    pub fn inorder(&self) -> Vec<&K> {
        let mut keys = Vec::new();
        self.inorder_from(self.root, &mut keys);
        keys
    }

    /// Keys in left-right-node order.
    pub fn postorder(&self) -> Vec<&K> {
        let mut keys = Vec::new();
        self.postorder_from(self.root, &mut keys);
        keys
    }

    /// Structural equality: both trees have the same shape and the same key at every
    /// position.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::Tree;
    ///
    /// let mut a = Tree::new();
    /// let mut b = Tree::new();
    /// for key in [2, 1, 3] {
    ///     a.insert(key).unwrap();
    /// }
    /// for key in [1, 2, 3] {
    ///     b.insert(key).unwrap();
    /// }
    ///
    /// assert!(a.equals(&a));
    /// assert!(!a.equals(&b));
    /// assert!(a.same_values(&b));
    /// ```
    pub fn equals(&self, other: &Tree<K>) -> bool
    where
        K: PartialEq,
    {
        self.equals_from(self.root, other, other.root)
    }

    /// Whether both trees hold the same keys, ignoring shape.
    pub fn same_values(&self, other: &Tree<K>) -> bool
    where
        K: PartialEq,
    {
        let ours = self.inorder();
        let theirs = other.inorder();
        ours.len() == theirs.len() && ours.iter().zip(&theirs).all(|(a, b)| a == b)
    }

    /// A loose sanity check: `2^height <= size <= 2^(height + 1)`. Any minimal height tree
    /// passes. The empty tree does not.
    pub fn is_balanced(&self) -> bool {
        let size = self.size() as f64;
        let height = self.height() as i32;
        size >= 2f64.powi(height) && size <= 2f64.powi(height + 1)
    }

    pub(crate) fn subtree_size(&self, node: Option<NodeId>) -> usize {
        match node {
            None => 0,
            Some(id) => {
                let node = &self.nodes[id];
                1 + self.subtree_size(node.left) + self.subtree_size(node.right)
            }
        }
    }

    fn subtree_height(&self, node: Option<NodeId>) -> isize {
        match node {
            None => -1,
            Some(id) => {
                let node = &self.nodes[id];
                1 + self
                    .subtree_height(node.left)
                    .max(self.subtree_height(node.right))
            }
        }
    }

    fn leftmost(&self, id: NodeId) -> NodeId {
        match self.nodes[id].left {
            Some(left) => self.leftmost(left),
            None => id,
        }
    }

    fn rightmost(&self, id: NodeId) -> NodeId {
        match self.nodes[id].right {
            Some(right) => self.rightmost(right),
            None => id,
        }
    }

    fn preorder_from<'a>(&'a self, node: Option<NodeId>, keys: &mut Vec<&'a K>) {
        if let Some(id) = node {
            let node = &self.nodes[id];
            keys.push(&node.key);
            self.preorder_from(node.left, keys);
            self.preorder_from(node.right, keys);
        }
    }

    fn inorder_from<'a>(&'a self, node: Option<NodeId>, keys: &mut Vec<&'a K>) {
        if let Some(id) = node {
            let node = &self.nodes[id];
            self.inorder_from(node.left, keys);
            keys.push(&node.key);
            self.inorder_from(node.right, keys);
        }
    }

    fn postorder_from<'a>(&'a self, node: Option<NodeId>, keys: &mut Vec<&'a K>) {
        if let Some(id) = node {
            let node = &self.nodes[id];
            self.postorder_from(node.left, keys);
            self.postorder_from(node.right, keys);
            keys.push(&node.key);
        }
    }

    fn equals_from(&self, node: Option<NodeId>, other: &Self, other_node: Option<NodeId>) -> bool
    where
        K: PartialEq,
    {
        match (node, other_node) {
            (None, None) => true,
            (Some(a), Some(b)) => {
                let (a, b) = (&self.nodes[a], &other.nodes[b]);
                a.key == b.key
                    && self.equals_from(a.left, other, b.left)
                    && self.equals_from(a.right, other, b.right)
            }
            _ => false,
        }
    }

    pub(crate) fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].parent
    }

    /// Where `id` currently hangs from.
    pub(crate) fn slot_of(&self, id: NodeId) -> Slot {
        match self.nodes[id].parent {
            None => Slot::Root,
            Some(parent) if self.nodes[parent].left == Some(id) => Slot::Left(parent),
            Some(parent) => Slot::Right(parent),
        }
    }

    /// Hangs `subtree` from `slot`, replacing whatever was there, and points the subtree's
    /// root back at its new parent. The previous occupant of the slot is not freed.
    pub(crate) fn set_slot(&mut self, slot: Slot, subtree: Option<NodeId>) {
        match slot {
            Slot::Root => self.root = subtree,
            Slot::Left(parent) => self.nodes[parent].left = subtree,
            Slot::Right(parent) => self.nodes[parent].right = subtree,
        }
        if let Some(id) = subtree {
            self.nodes[id].parent = slot.parent();
        }
    }

    /// Unlinks and frees the node `id`. A node with at most one child is replaced by that
    /// child. A node with two children takes its in-order predecessor's key and the
    /// predecessor node (which has no right child) is unlinked instead.
    fn remove_node(&mut self, id: NodeId) {
        let node = &self.nodes[id];
        match (node.left, node.right) {
            (Some(left), Some(_)) => {
                let predecessor = self.rightmost(left);
                let slot = self.slot_of(predecessor);
                let replacement = self.nodes[predecessor].left;
                self.set_slot(slot, replacement);

                let predecessor = self.nodes.remove(predecessor);
                self.nodes[id].key = predecessor.key;
            }
            (child, None) | (None, child) => {
                let slot = self.slot_of(id);
                self.set_slot(slot, child);
                self.nodes.remove(id);
            }
        }
    }

    /// Whether every child below `node` points back at its parent and `node` itself points
    /// at `parent`.
    pub(crate) fn links_consistent(&self, node: Option<NodeId>, parent: Option<NodeId>) -> bool {
        match node {
            None => true,
            Some(id) => {
                let node = &self.nodes[id];
                node.parent == parent
                    && self.links_consistent(node.left, Some(id))
                    && self.links_consistent(node.right, Some(id))
            }
        }
    }
}

impl<K> Tree<K>
where
    K: PartialOrd,
{
    /// Inserts the given key. Keys equal to one already stored go to its left, so inserting a
    /// key twice stores it twice.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] when the key can't be ordered (e.g. `f64::NAN`). The tree
    /// is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use scapegoat::{Error, Tree};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1.5).unwrap();
    /// tree.insert(1.5).unwrap();
    /// assert_eq!(tree.size(), 2);
    ///
    /// assert!(matches!(tree.insert(f64::NAN), Err(Error::InvalidArgument(_))));
    /// assert_eq!(tree.size(), 2);
    /// ```
    pub fn insert(&mut self, key: K) -> Result<()> {
        self.insert_node(key).map(|_| ())
    }

    /// Finds the stored key equal to `key`. When duplicates are stored, the one closest to the
    /// root is returned.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] when the key can't be ordered.
    pub fn find(&self, key: &K) -> Result<Option<&K>> {
        validate(key)?;
        Ok(self.locate(key)?.map(|id| &self.nodes[id].key))
    }

    /// Whether a key equal to `key` is stored.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] when the key can't be ordered.
    pub fn contains(&self, key: &K) -> Result<bool> {
        self.find(key).map(|found| found.is_some())
    }

    /// Deletes one occurrence of `key`. Returns whether anything was deleted.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] when the key can't be ordered. The tree is left untouched.
    pub fn delete(&mut self, key: &K) -> Result<bool> {
        validate(key)?;
        match self.locate(key)? {
            Some(id) => {
                self.remove_node(id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Inserts `key` as a new leaf and returns the leaf's id.
    pub(crate) fn insert_node(&mut self, key: K) -> Result<NodeId> {
        validate(&key)?;
        // Find where the leaf goes before touching anything so a failed comparison can't
        // leave a half-finished insert behind.
        let slot = match self.root {
            None => Slot::Root,
            Some(root) => self.leaf_slot(root, &key)?,
        };
        let id = self.nodes.insert(Node::new(key, slot.parent()));
        self.set_slot(slot, Some(id));
        Ok(id)
    }

    fn leaf_slot(&self, id: NodeId, key: &K) -> Result<Slot> {
        let node = &self.nodes[id];
        match compare(key, &node.key)? {
            Ordering::Less | Ordering::Equal => match node.left {
                Some(left) => self.leaf_slot(left, key),
                None => Ok(Slot::Left(id)),
            },
            Ordering::Greater => match node.right {
                Some(right) => self.leaf_slot(right, key),
                None => Ok(Slot::Right(id)),
            },
        }
    }

    fn locate(&self, key: &K) -> Result<Option<NodeId>> {
        match self.root {
            None => Ok(None),
            Some(root) => self.locate_from(root, key),
        }
    }

    fn locate_from(&self, id: NodeId, key: &K) -> Result<Option<NodeId>> {
        let node = &self.nodes[id];
        match compare(key, &node.key)? {
            Ordering::Less => match node.left {
                Some(left) => self.locate_from(left, key),
                None => Ok(None),
            },
            Ordering::Equal => Ok(Some(id)),
            Ordering::Greater => match node.right {
                Some(right) => self.locate_from(right, key),
                None => Ok(None),
            },
        }
    }
}
