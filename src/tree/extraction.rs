//! Whole-map traversal and sub-map extraction.
//!
//! The `extract_*` splitting operations never touch the source map. They
//! walk it with an explicit stack and insert every qualifying entry into a
//! fresh map that shares no nodes with the source, using a clone of the
//! source comparator.
//!
//! Each walk skips a subtree only when no key inside it can qualify:
//!
//! | Operation            | Kept keys          | Left subtree      | Right subtree    |
//! |----------------------|--------------------|-------------------|------------------|
//! | `extract_preceding`  | `key < boundary`   | always            | if `key < boundary` |
//! | `extract_range`      | `from <= key < to` | if `key >= from`  | if `key < to`    |
//! | `extract_succeeding` | `key > start`      | if `key > start`  | always (first)   |

use std::cmp::Ordering;

use smallvec::SmallVec;

use super::TRAVERSAL_STACK_INLINE;
use super::node::NodeIndex;
use super::ordered_map::OrderedMap;
use crate::comparator::Comparator;

type TraversalStack = SmallVec<[NodeIndex; TRAVERSAL_STACK_INLINE]>;

impl<K, V, C> OrderedMap<K, V, C> {
    /// Returns every entry in ascending key order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bst_ordmap::tree::OrderedMap;
    ///
    /// let map: OrderedMap<i32, &str> = [(2, "b"), (1, "a")].into_iter().collect();
    /// assert_eq!(map.get_all_entries(), vec![(1, "a"), (2, "b")]);
    /// ```
    #[must_use]
    pub fn get_all_entries(&self) -> Vec<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        self.iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Returns every key in ascending order.
    #[must_use]
    pub fn extract_keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.keys().cloned().collect()
    }
}

impl<K: Clone, V: Clone, C: Comparator<K> + Clone> OrderedMap<K, V, C> {
    fn empty_like(&self) -> Self {
        Self::with_comparator(self.comparator.clone())
    }

    fn insert_copy_of(&self, index: NodeIndex, target: &mut Self) {
        let node = &self.arena[index];
        target.insert(node.key.clone(), node.value.clone());
    }

    /// Returns a new map holding the entries whose keys are strictly less
    /// than `boundary`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bst_ordmap::tree::OrderedMap;
    ///
    /// let map: OrderedMap<i32, char> = [(5, 'a'), (3, 'b'), (8, 'c')].into_iter().collect();
    /// let preceding = map.extract_preceding(&5);
    ///
    /// assert_eq!(preceding.extract_keys(), vec![3]);
    /// assert_eq!(map.count(), 3);
    /// ```
    #[must_use]
    pub fn extract_preceding(&self, boundary: &K) -> Self {
        let mut result = self.empty_like();
        let mut stack = TraversalStack::new();
        let mut cursor = self.root;

        loop {
            while let Some(index) = cursor {
                stack.push(index);
                cursor = self.arena[index].left;
            }
            let Some(index) = stack.pop() else {
                break;
            };
            let node = &self.arena[index];
            if self.comparator.compare(&node.key, boundary) == Ordering::Less {
                self.insert_copy_of(index, &mut result);
                cursor = node.right;
            }
        }

        debug_event!(
            extracted = result.count(),
            source = self.length,
            "extracted preceding entries"
        );
        result
    }

    /// Returns a new map holding the entries with `from <= key < to`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bst_ordmap::tree::OrderedMap;
    ///
    /// let map: OrderedMap<i32, &str> =
    ///     [(5, "a"), (3, "b"), (8, "c"), (1, "d"), (4, "e")].into_iter().collect();
    /// let range = map.extract_range(&3, &8);
    ///
    /// assert_eq!(range.get_all_entries(), vec![(3, "b"), (4, "e"), (5, "a")]);
    /// assert_eq!(map.count(), 5);
    /// ```
    #[must_use]
    pub fn extract_range(&self, from: &K, to: &K) -> Self {
        let mut result = self.empty_like();
        let mut stack = TraversalStack::new();
        let mut cursor = self.root;

        loop {
            while let Some(index) = cursor {
                stack.push(index);
                let node = &self.arena[index];
                cursor = if self.comparator.compare(&node.key, from) == Ordering::Less {
                    None
                } else {
                    node.left
                };
            }
            let Some(index) = stack.pop() else {
                break;
            };
            let node = &self.arena[index];
            let at_least_from = self.comparator.compare(&node.key, from) != Ordering::Less;
            let below_to = self.comparator.compare(&node.key, to) == Ordering::Less;
            if at_least_from && below_to {
                self.insert_copy_of(index, &mut result);
            }
            if below_to {
                cursor = node.right;
            }
        }

        debug_event!(
            extracted = result.count(),
            source = self.length,
            "extracted range"
        );
        result
    }

    /// Returns a new map holding the entries whose keys are strictly greater
    /// than `start`.
    ///
    /// Right subtrees are always visited; the `start` test only prunes left
    /// subtrees.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bst_ordmap::tree::OrderedMap;
    ///
    /// let map: OrderedMap<i32, char> = [(5, 'a'), (3, 'b'), (8, 'c')].into_iter().collect();
    /// let succeeding = map.extract_succeeding(&3);
    ///
    /// assert_eq!(succeeding.extract_keys(), vec![5, 8]);
    /// ```
    #[must_use]
    pub fn extract_succeeding(&self, start: &K) -> Self {
        let mut result = self.empty_like();
        let mut stack = TraversalStack::new();
        let mut cursor = self.root;

        loop {
            while let Some(index) = cursor {
                stack.push(index);
                cursor = self.arena[index].right;
            }
            let Some(index) = stack.pop() else {
                break;
            };
            let node = &self.arena[index];
            if self.comparator.compare(&node.key, start) == Ordering::Greater {
                self.insert_copy_of(index, &mut result);
                cursor = node.left;
            }
        }

        debug_event!(
            extracted = result.count(),
            source = self.length,
            "extracted succeeding entries"
        );
        result
    }
}

// =============================================================================
// Tests
// =============================================================================
