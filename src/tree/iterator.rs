//! In-order iterators over an [`OrderedMap`](super::OrderedMap).

use std::iter::FusedIterator;

use smallvec::SmallVec;

use super::TRAVERSAL_STACK_INLINE;
use super::node::{Arena, NodeIndex};

// =============================================================================
// Iter
// =============================================================================

/// An iterator over the entries of an [`OrderedMap`](super::OrderedMap) in
/// ascending key order.
///
/// The pending path is kept on an explicit stack, so iterating a degenerate
/// tree does not recurse.
pub struct Iter<'a, K, V> {
    arena: &'a Arena<K, V>,
    stack: SmallVec<[NodeIndex; TRAVERSAL_STACK_INLINE]>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(arena: &'a Arena<K, V>, root: Option<NodeIndex>, length: usize) -> Self {
        let mut iterator = Self {
            arena,
            stack: SmallVec::new(),
            remaining: length,
        };
        iterator.descend_left(root);
        iterator
    }

    fn descend_left(&mut self, mut cursor: Option<NodeIndex>) {
        while let Some(index) = cursor {
            self.stack.push(index);
            cursor = self.arena[index].left;
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let arena: &'a Arena<K, V> = self.arena;
        let node = &arena[index];
        self.descend_left(node.right);
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

// =============================================================================
// Keys / Values
// =============================================================================

/// An iterator over the keys of an [`OrderedMap`](super::OrderedMap) in
/// ascending order.
pub struct Keys<'a, K, V> {
    pub(crate) inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

/// An iterator over the values of an [`OrderedMap`](super::OrderedMap) in
/// ascending key order.
pub struct Values<'a, K, V> {
    pub(crate) inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

// =============================================================================
// IntoIter
// =============================================================================

/// An owning iterator over the entries of an [`OrderedMap`](super::OrderedMap)
/// in ascending key order.
pub struct IntoIter<K, V> {
    entries: std::vec::IntoIter<(K, V)>,
}

impl<K, V> IntoIter<K, V> {
    pub(crate) fn new(mut arena: Arena<K, V>, root: Option<NodeIndex>) -> Self {
        let order: Vec<NodeIndex> = {
            let mut order = Vec::with_capacity(arena.occupied());
            let mut stack: SmallVec<[NodeIndex; TRAVERSAL_STACK_INLINE]> = SmallVec::new();
            let mut cursor = root;
            loop {
                while let Some(index) = cursor {
                    stack.push(index);
                    cursor = arena[index].left;
                }
                let Some(index) = stack.pop() else {
                    break;
                };
                order.push(index);
                cursor = arena[index].right;
            }
            order
        };
        let entries: Vec<(K, V)> = order
            .into_iter()
            .map(|index| {
                let node = arena.release(index);
                (node.key, node.value)
            })
            .collect();
        Self {
            entries: entries.into_iter(),
        }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.entries.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

// =============================================================================
// Tests
// =============================================================================
