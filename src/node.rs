//! Tree vertices and the arena that owns them.
//!
//! Every `Node` lives in an [`Arena`] and refers to its children and parent by [`NodeId`].
//! The parent link is a plain index, so moving a subtree around is a matter of rewriting a
//! few indices instead of juggling owning and non-owning pointers.

use std::ops::{Index, IndexMut};

/// Stable address of a `Node` inside an [`Arena`]. Ids of removed nodes are recycled.
pub(crate) type NodeId = usize;

#[derive(Clone, Debug)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    /// `None` only for the root of the tree (or of a subtree that hasn't been attached yet).
    pub(crate) parent: Option<NodeId>,
}

impl<K> Node<K> {
    pub(crate) fn new(key: K, parent: Option<NodeId>) -> Self {
        Self {
            key,
            left: None,
            right: None,
            parent,
        }
    }
}

/// The place a subtree hangs from. Used to re-attach a replacement subtree after the
/// original one has been spliced out or rebuilt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Slot {
    /// The subtree is the whole tree.
    Root,
    /// The subtree is the left child of the given node.
    Left(NodeId),
    /// The subtree is the right child of the given node.
    Right(NodeId),
}

impl Slot {
    /// The node owning this slot, if any.
    pub(crate) fn parent(self) -> Option<NodeId> {
        match self {
            Self::Root => None,
            Self::Left(p) | Self::Right(p) => Some(p),
        }
    }
}

/// Owns every `Node` of a tree. Removed nodes leave a vacant slot whose id is handed out
/// again by the next [`Arena::insert`].
#[derive(Clone, Debug)]
pub(crate) struct Arena<K> {
    slots: Vec<Option<Node<K>>>,
    vacant: Vec<NodeId>,
}

impl<K> Default for Arena<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Arena<K> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            vacant: Vec::new(),
        }
    }

    pub(crate) fn insert(&mut self, node: Node<K>) -> NodeId {
        match self.vacant.pop() {
            Some(id) => {
                self.slots[id] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    /// Takes the node out of the arena. Its children and parent are left pointing at
    /// whatever they pointed at; fixing them up is the caller's job.
    ///
    /// ## Panics
    ///
    /// When `id` is vacant.
    pub(crate) fn remove(&mut self, id: NodeId) -> Node<K> {
        let node = self.slots[id]
            .take()
            .expect("Removing a node requires a live node");
        self.vacant.push(id);
        node
    }

    /// Number of live nodes.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.slots.len() - self.vacant.len()
    }
}

impl<K> Index<NodeId> for Arena<K> {
    type Output = Node<K>;

    fn index(&self, id: NodeId) -> &Self::Output {
        self.slots[id]
            .as_ref()
            .expect("Node ids held by the tree are live")
    }
}

impl<K> IndexMut<NodeId> for Arena<K> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        self.slots[id]
            .as_mut()
            .expect("Node ids held by the tree are live")
    }
}
