//! Node storage for [`OrderedMap`](super::OrderedMap).
//!
//! Nodes live in an index-addressed [`Arena`]. Child and parent links are
//! [`NodeIndex`] values, so the parent back-reference never owns anything and
//! the structure contains no reference cycles. Released slots are recycled
//! through a free list.

use std::fmt;
use std::ops::{Index, IndexMut};

// =============================================================================
// NodeIndex Definition
// =============================================================================

/// Position of a node inside an [`Arena`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub(crate) struct NodeIndex(usize);

// =============================================================================
// Node Definition
// =============================================================================

/// Internal node structure for the binary search tree.
#[derive(Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Option<NodeIndex>,
    pub(crate) right: Option<NodeIndex>,
    /// Structural parent. Only read while relinking during deletion.
    pub(crate) parent: Option<NodeIndex>,
}

impl<K, V> Node<K, V> {
    /// Creates a childless node attached below `parent`.
    pub(crate) const fn new(key: K, value: V, parent: Option<NodeIndex>) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
            parent,
        }
    }
}

// =============================================================================
// Arena Definition
// =============================================================================

/// Slot storage owning every node of one map.
#[derive(Clone)]
pub(crate) struct Arena<K, V> {
    slots: Vec<Option<Node<K, V>>>,
    vacant: Vec<NodeIndex>,
}

impl<K, V> Arena<K, V> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            vacant: Vec::new(),
        }
    }

    /// Stores `node`, reusing a released slot when one is available.
    pub(crate) fn allocate(&mut self, node: Node<K, V>) -> NodeIndex {
        if let Some(index) = self.vacant.pop() {
            self.slots[index.0] = Some(node);
            index
        } else {
            self.slots.push(Some(node));
            NodeIndex(self.slots.len() - 1)
        }
    }

    /// Takes the node out of its slot. The caller must already have unlinked it.
    pub(crate) fn release(&mut self, index: NodeIndex) -> Node<K, V> {
        match self.slots[index.0].take() {
            Some(node) => {
                self.vacant.push(index);
                node
            }
            None => unreachable!("released vacant arena slot {index:?}"),
        }
    }

    /// Drops every node at once.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.vacant.clear();
    }

    /// Number of occupied slots.
    pub(crate) fn occupied(&self) -> usize {
        self.slots.len() - self.vacant.len()
    }

    /// Follows left links from `start` to the smallest node of its subtree.
    pub(crate) fn leftmost(&self, start: NodeIndex) -> NodeIndex {
        let mut current = start;
        while let Some(left) = self[current].left {
            current = left;
        }
        current
    }

    /// Follows right links from `start` to the largest node of its subtree.
    pub(crate) fn rightmost(&self, start: NodeIndex) -> NodeIndex {
        let mut current = start;
        while let Some(right) = self[current].right {
            current = right;
        }
        current
    }
}

impl<K, V> Index<NodeIndex> for Arena<K, V> {
    type Output = Node<K, V>;

    fn index(&self, index: NodeIndex) -> &Self::Output {
        match &self.slots[index.0] {
            Some(node) => node,
            None => unreachable!("vacant arena slot {index:?} is still linked"),
        }
    }
}

impl<K, V> IndexMut<NodeIndex> for Arena<K, V> {
    fn index_mut(&mut self, index: NodeIndex) -> &mut Self::Output {
        match &mut self.slots[index.0] {
            Some(node) => node,
            None => unreachable!("vacant arena slot {index:?} is still linked"),
        }
    }
}

// =============================================================================
// NodeRef Definition
// =============================================================================

/// A read-only handle to one node of an [`OrderedMap`](super::OrderedMap).
///
/// Returned by the node-form navigation queries such as
/// [`find_floor`](super::OrderedMap::find_floor). The handle borrows the map,
/// so the map cannot be mutated while it is alive.
///
/// # Examples
///
/// ```rust
/// use bst_ordmap::tree::OrderedMap;
///
/// let mut map = OrderedMap::new();
/// map.insert(5, "five");
/// map.insert(3, "three");
///
/// let node = map.find_floor(&4).unwrap();
/// assert_eq!(node.key(), &3);
/// assert_eq!(node.value(), &"three");
/// assert_eq!(node.parent().map(|parent| *parent.key()), Some(5));
/// ```
pub struct NodeRef<'a, K, V> {
    arena: &'a Arena<K, V>,
    index: NodeIndex,
}

impl<'a, K, V> NodeRef<'a, K, V> {
    pub(crate) const fn new(arena: &'a Arena<K, V>, index: NodeIndex) -> Self {
        Self { arena, index }
    }

    fn node(&self) -> &'a Node<K, V> {
        let arena: &'a Arena<K, V> = self.arena;
        &arena[self.index]
    }

    /// Returns the key stored in this node.
    #[must_use]
    pub fn key(&self) -> &'a K {
        &self.node().key
    }

    /// Returns the value stored in this node.
    #[must_use]
    pub fn value(&self) -> &'a V {
        &self.node().value
    }

    /// Returns the key-value pair stored in this node.
    #[must_use]
    pub fn entry(&self) -> (&'a K, &'a V) {
        let node = self.node();
        (&node.key, &node.value)
    }

    /// Returns the structural parent, or `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.node().parent.map(|index| Self::new(self.arena, index))
    }

    /// Returns the left child.
    #[must_use]
    pub fn left(&self) -> Option<Self> {
        self.node().left.map(|index| Self::new(self.arena, index))
    }

    /// Returns the right child.
    #[must_use]
    pub fn right(&self) -> Option<Self> {
        self.node().right.map(|index| Self::new(self.arena, index))
    }
}

impl<K, V> Clone for NodeRef<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for NodeRef<'_, K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for NodeRef<'_, K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("NodeRef")
            .field("key", self.key())
            .field("value", self.value())
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_allocate_reuses_released_slot() {
        let mut arena: Arena<i32, &str> = Arena::new();
        let first = arena.allocate(Node::new(1, "one", None));
        let second = arena.allocate(Node::new(2, "two", Some(first)));
        assert_eq!(arena.occupied(), 2);

        let released = arena.release(first);
        assert_eq!(released.key, 1);
        assert_eq!(arena.occupied(), 1);

        let third = arena.allocate(Node::new(3, "three", None));
        assert_eq!(third, first);
        assert_ne!(third, second);
        assert_eq!(arena[third].key, 3);
    }

    #[rstest]
    fn test_leftmost_and_rightmost() {
        let mut arena: Arena<i32, ()> = Arena::new();
        let root = arena.allocate(Node::new(5, (), None));
        let left = arena.allocate(Node::new(3, (), Some(root)));
        let right = arena.allocate(Node::new(8, (), Some(root)));
        arena[root].left = Some(left);
        arena[root].right = Some(right);

        assert_eq!(arena.leftmost(root), left);
        assert_eq!(arena.rightmost(root), right);
        assert_eq!(arena.leftmost(right), right);
    }

    #[rstest]
    fn test_clear_empties_arena() {
        let mut arena: Arena<i32, ()> = Arena::new();
        let index = arena.allocate(Node::new(1, (), None));
        arena.release(index);
        arena.allocate(Node::new(2, (), None));
        arena.clear();
        assert_eq!(arena.occupied(), 0);
    }

    #[rstest]
    #[should_panic(expected = "vacant arena slot")]
    fn test_index_of_released_slot_panics() {
        let mut arena: Arena<i32, ()> = Arena::new();
        let index = arena.allocate(Node::new(1, (), None));
        arena.release(index);
        let _ = &arena[index];
    }

    #[rstest]
    fn test_node_ref_navigation() {
        let mut arena: Arena<i32, &str> = Arena::new();
        let root = arena.allocate(Node::new(5, "five", None));
        let left = arena.allocate(Node::new(3, "three", Some(root)));
        arena[root].left = Some(left);

        let handle = NodeRef::new(&arena, left);
        assert_eq!(handle.entry(), (&3, &"three"));
        assert!(handle.left().is_none());
        let parent = handle.parent().map(|parent| *parent.key());
        assert_eq!(parent, Some(5));
        assert_eq!(format!("{handle:?}"), "NodeRef { key: 3, value: \"three\" }");
    }
}
