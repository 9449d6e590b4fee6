//! The [`OrderedMap`] type: construction, point operations and deletion.

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use smallvec::SmallVec;

use super::iterator::{IntoIter, Iter, Keys, Values};
use super::node::{Arena, Node, NodeIndex};
use super::TRAVERSAL_STACK_INLINE;
use crate::comparator::{Comparator, FallbackOrder, NaturalOrder};
use crate::error::EmptyCollectionError;

// =============================================================================
// OrderedMap Definition
// =============================================================================

/// An ordered map backed by an unbalanced binary search tree.
///
/// Keys are ordered by the comparator `C`, which defaults to [`NaturalOrder`].
/// Each node keeps a back-reference to its parent so that deletion can relink
/// a child into its grandparent in one step.
///
/// # Time Complexity
///
/// `h` is the height of the tree. Without balancing, `h` ranges from
/// `log N` (random insertion order) to `N` (sorted insertion order).
///
/// | Operation                              | Complexity |
/// |----------------------------------------|------------|
/// | `insert` / `delete` / `has_key`        | O(h)       |
/// | `retrieve` / `get`                     | O(h)       |
/// | `find_floor` / `find_ceiling`          | O(h)       |
/// | `find_predecessor` / `find_successor`  | O(h)       |
/// | `smallest_key` / `largest_key`         | O(h)       |
/// | `extract_first` / `peek_first`         | O(h)       |
/// | `has_value`                            | O(N)       |
/// | `get_all_entries` / `iter`             | O(N)       |
/// | `extract_preceding` / `extract_range`  | O(k · h')  |
/// | `count` / `is_empty` / `erase_all`     | O(1)       |
///
/// # Examples
///
/// ```rust
/// use bst_ordmap::tree::OrderedMap;
///
/// let mut map = OrderedMap::new();
/// map.insert(5, "a");
/// map.insert(3, "b");
/// map.insert(8, "c");
///
/// assert_eq!(map.count(), 3);
/// assert_eq!(map.retrieve(&3), "b");
/// assert_eq!(map.retrieve(&4), ""); // absent keys yield the default value
///
/// assert!(map.delete(&5));
/// assert!(!map.has_key(&5));
/// ```
#[derive(Clone)]
pub struct OrderedMap<K, V, C = NaturalOrder> {
    /// Top node of the tree
    pub(crate) root: Option<NodeIndex>,
    /// Storage for every reachable node
    pub(crate) arena: Arena<K, V>,
    /// Total order over keys
    pub(crate) comparator: C,
    /// Number of reachable nodes
    pub(crate) length: usize,
}

impl<K, V> OrderedMap<K, V, NaturalOrder> {
    /// Creates an empty map ordered by the key type's `Ord` implementation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bst_ordmap::tree::OrderedMap;
    ///
    /// let map: OrderedMap<i32, String> = OrderedMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<K: Ord, V, C> OrderedMap<K, V, FallbackOrder<C>> {
    /// Creates an empty map using `comparator` if one is given, or natural
    /// key order otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bst_ordmap::comparator::{NaturalOrder, ReverseOrder};
    /// use bst_ordmap::tree::OrderedMap;
    ///
    /// let mut natural = OrderedMap::with_optional_comparator(None::<ReverseOrder<NaturalOrder>>);
    /// natural.extend([(2, ()), (1, ())]);
    /// assert_eq!(natural.extract_keys(), vec![1, 2]);
    ///
    /// let mut reversed = OrderedMap::with_optional_comparator(Some(ReverseOrder(NaturalOrder)));
    /// reversed.extend([(2, ()), (1, ())]);
    /// assert_eq!(reversed.extract_keys(), vec![2, 1]);
    /// ```
    #[inline]
    #[must_use]
    pub const fn with_optional_comparator(comparator: Option<C>) -> Self {
        Self::with_comparator(FallbackOrder::new(comparator))
    }
}

impl<K, V, C> OrderedMap<K, V, C> {
    /// Creates an empty map ordered by `comparator`.
    ///
    /// Maps produced by the `extract_*` splitting operations inherit a clone
    /// of this comparator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bst_ordmap::tree::OrderedMap;
    ///
    /// let mut map = OrderedMap::with_comparator(|left: &i32, right: &i32| right.cmp(left));
    /// map.insert(1, "one");
    /// map.insert(2, "two");
    /// assert_eq!(map.smallest_key(), Ok(&2));
    /// ```
    #[inline]
    #[must_use]
    pub const fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            arena: Arena::new(),
            comparator,
            length: 0,
        }
    }

    /// Returns the comparator ordering this map.
    #[inline]
    #[must_use]
    pub const fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns the number of entries in the map.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub const fn count(&self) -> usize {
        self.length
    }

    /// Alias of [`count`](Self::count) following standard collection naming.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the map contains no entries.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Discards every entry, leaving an empty map with the same comparator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bst_ordmap::tree::OrderedMap;
    ///
    /// let mut map: OrderedMap<i32, i32> = (0..10).map(|key| (key, key)).collect();
    /// map.erase_all();
    /// assert!(map.is_empty());
    /// ```
    pub fn erase_all(&mut self) {
        debug_event!(discarded = self.length, "erased all entries");
        self.arena.clear();
        self.root = None;
        self.length = 0;
    }

    /// Returns `true` if any entry holds a value equal to `value`.
    ///
    /// Values are not ordered, so this visits nodes one by one until a match
    /// is found.
    ///
    /// # Complexity
    ///
    /// O(N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bst_ordmap::tree::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, "one");
    /// assert!(map.has_value(&"one"));
    /// assert!(!map.has_value(&"two"));
    /// ```
    #[must_use]
    pub fn has_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        let mut stack: SmallVec<[NodeIndex; TRAVERSAL_STACK_INLINE]> =
            self.root.into_iter().collect();
        while let Some(index) = stack.pop() {
            let node = &self.arena[index];
            if node.value == *value {
                return true;
            }
            stack.extend(node.right);
            stack.extend(node.left);
        }
        false
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    ///
    /// The tree is never rebalanced, so inserting keys in sorted order yields
    /// a height equal to the number of entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bst_ordmap::tree::OrderedMap;
    ///
    /// let sorted: OrderedMap<i32, ()> = (0..8).map(|key| (key, ())).collect();
    /// assert_eq!(sorted.height(), 8);
    ///
    /// let shuffled: OrderedMap<i32, ()> = [4, 2, 6, 1, 3, 5, 7].map(|key| (key, ())).into_iter().collect();
    /// assert_eq!(shuffled.height(), 3);
    /// ```
    #[must_use]
    pub fn height(&self) -> usize {
        let mut stack: SmallVec<[(NodeIndex, usize); TRAVERSAL_STACK_INLINE]> =
            self.root.map(|root| (root, 1)).into_iter().collect();
        let mut height = 0;
        while let Some((index, depth)) = stack.pop() {
            height = height.max(depth);
            let node = &self.arena[index];
            stack.extend(node.left.map(|left| (left, depth + 1)));
            stack.extend(node.right.map(|right| (right, depth + 1)));
        }
        height
    }

    /// Returns the entry with the smallest key without removing it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bst_ordmap::tree::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// assert_eq!(map.peek_first(), None);
    ///
    /// map.insert(2, "two");
    /// map.insert(1, "one");
    /// assert_eq!(map.peek_first(), Some((&1, &"one")));
    /// assert_eq!(map.count(), 2);
    /// ```
    #[must_use]
    pub fn peek_first(&self) -> Option<(&K, &V)> {
        let node = &self.arena[self.arena.leftmost(self.root?)];
        Some((&node.key, &node.value))
    }

    /// Returns the entry with the largest key without removing it.
    #[must_use]
    pub fn peek_last(&self) -> Option<(&K, &V)> {
        let node = &self.arena[self.arena.rightmost(self.root?)];
        Some((&node.key, &node.value))
    }

    /// Removes and returns the entry with the smallest key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bst_ordmap::tree::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(2, "two");
    /// map.insert(1, "one");
    ///
    /// assert_eq!(map.extract_first(), Some((1, "one")));
    /// assert_eq!(map.extract_first(), Some((2, "two")));
    /// assert_eq!(map.extract_first(), None);
    /// ```
    pub fn extract_first(&mut self) -> Option<(K, V)> {
        let index = self.arena.leftmost(self.root?);
        trace_event!(remaining = self.length - 1, "extracting first entry");
        Some(self.remove_node(index))
    }

    /// Removes and returns the entry with the largest key.
    pub fn extract_last(&mut self) -> Option<(K, V)> {
        let index = self.arena.rightmost(self.root?);
        trace_event!(remaining = self.length - 1, "extracting last entry");
        Some(self.remove_node(index))
    }

    /// Returns the smallest key.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyCollectionError`] if the map is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bst_ordmap::tree::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// assert!(map.smallest_key().is_err());
    ///
    /// map.insert(7, ());
    /// map.insert(3, ());
    /// assert_eq!(map.smallest_key(), Ok(&3));
    /// ```
    pub fn smallest_key(&self) -> Result<&K, EmptyCollectionError> {
        let root = self.root.ok_or(EmptyCollectionError {
            method_name: "smallest_key",
        })?;
        Ok(&self.arena[self.arena.leftmost(root)].key)
    }

    /// Returns the largest key.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyCollectionError`] if the map is empty.
    pub fn largest_key(&self) -> Result<&K, EmptyCollectionError> {
        let root = self.root.ok_or(EmptyCollectionError {
            method_name: "largest_key",
        })?;
        Ok(&self.arena[self.arena.rightmost(root)].key)
    }

    /// Returns an iterator over entries in ascending key order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bst_ordmap::tree::OrderedMap;
    ///
    /// let map: OrderedMap<i32, char> = [(2, 'b'), (1, 'a'), (3, 'c')].into_iter().collect();
    /// let entries: Vec<(&i32, &char)> = map.iter().collect();
    /// assert_eq!(entries, vec![(&1, &'a'), (&2, &'b'), (&3, &'c')]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.arena, self.root, self.length)
    }

    /// Returns an iterator over keys in ascending order.
    #[must_use]
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Returns an iterator over values in ascending key order.
    #[must_use]
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    // -------------------------------------------------------------------------
    // Deletion
    // -------------------------------------------------------------------------

    /// Removes the node at `index` from the tree and returns the entry it held.
    ///
    /// A node with two children stays in place: it receives the key and value
    /// of its in-order successor, and the successor node is unlinked instead.
    pub(crate) fn remove_node(&mut self, index: NodeIndex) -> (K, V) {
        let node = &self.arena[index];
        let entry = if let (Some(_), Some(right)) = (node.left, node.right) {
            let successor = self.arena.leftmost(right);
            let Node { key, value, .. } = self.unlink(successor);
            let target = &mut self.arena[index];
            trace_event!(case = "two children", "removed node");
            (
                mem::replace(&mut target.key, key),
                mem::replace(&mut target.value, value),
            )
        } else {
            let Node { key, value, .. } = self.unlink(index);
            (key, value)
        };
        self.length -= 1;
        entry
    }

    /// Detaches a node with at most one child and frees its slot.
    fn unlink(&mut self, index: NodeIndex) -> Node<K, V> {
        let node = &self.arena[index];
        let substitute = node.left.or(node.right);
        trace_event!(
            case = if substitute.is_some() { "one child" } else { "leaf" },
            "unlinked node"
        );
        self.substitute(index, substitute);
        self.arena.release(index)
    }

    /// Puts `substitute` where `original` hangs from its parent.
    fn substitute(&mut self, original: NodeIndex, substitute: Option<NodeIndex>) {
        let parent = self.arena[original].parent;
        match parent {
            None => self.root = substitute,
            Some(parent_index) => {
                let parent_node = &mut self.arena[parent_index];
                if parent_node.left == Some(original) {
                    parent_node.left = substitute;
                } else {
                    parent_node.right = substitute;
                }
            }
        }
        if let Some(substitute_index) = substitute {
            self.arena[substitute_index].parent = parent;
        }
    }
}

impl<K, V, C: Comparator<K>> OrderedMap<K, V, C> {
    /// Walks from the root to the node holding `key`.
    pub(crate) fn locate(&self, key: &K) -> Option<NodeIndex> {
        let mut cursor = self.root;
        while let Some(index) = cursor {
            let node = &self.arena[index];
            cursor = match self.comparator.compare(key, &node.key) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(index),
            };
        }
        None
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contains the key, its value is overwritten in
    /// place and the count is unchanged. No rebalancing is performed.
    ///
    /// # Complexity
    ///
    /// O(h)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bst_ordmap::tree::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, "one");
    /// map.insert(1, "ONE");
    ///
    /// assert_eq!(map.count(), 1);
    /// assert_eq!(map.retrieve(&1), "ONE");
    /// ```
    pub fn insert(&mut self, key: K, value: V) {
        let mut parent = None;
        let mut direction = Ordering::Equal;
        let mut cursor = self.root;

        while let Some(index) = cursor {
            let node = &mut self.arena[index];
            direction = self.comparator.compare(&key, &node.key);
            cursor = match direction {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => {
                    node.value = value;
                    trace_event!(count = self.length, "overwrote existing value");
                    return;
                }
            };
            parent = Some(index);
        }

        let index = self.arena.allocate(Node::new(key, value, parent));
        match parent {
            None => self.root = Some(index),
            Some(parent_index) if direction == Ordering::Less => {
                self.arena[parent_index].left = Some(index);
            }
            Some(parent_index) => self.arena[parent_index].right = Some(index),
        }
        self.length += 1;
        trace_event!(count = self.length, "inserted new node");
    }

    /// Returns `true` if the map contains `key`.
    ///
    /// # Complexity
    ///
    /// O(h)
    #[must_use]
    pub fn has_key(&self, key: &K) -> bool {
        self.locate(key).is_some()
    }

    /// Returns a reference to the value stored under `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bst_ordmap::tree::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, 0);
    /// assert_eq!(map.get(&1), Some(&0));
    /// assert_eq!(map.get(&2), None);
    /// ```
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.locate(key).map(|index| &self.arena[index].value)
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.locate(key).map(|index| &mut self.arena[index].value)
    }

    /// Returns the value stored under `key`, or `V::default()` if the key is
    /// absent.
    ///
    /// An absent key cannot be told apart from a key whose stored value
    /// equals the default. Pair this with [`has_key`](Self::has_key), or use
    /// [`get`](Self::get), when the difference matters.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bst_ordmap::tree::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, 0);
    ///
    /// assert_eq!(map.retrieve(&1), 0);
    /// assert_eq!(map.retrieve(&2), 0);
    /// assert!(!map.has_key(&2));
    /// ```
    #[must_use]
    pub fn retrieve(&self, key: &K) -> V
    where
        V: Default + Clone,
    {
        self.get(key).cloned().unwrap_or_default()
    }

    /// Removes `key` from the map, returning `true` if it was present.
    ///
    /// Deleting an absent key leaves the map unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bst_ordmap::tree::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, "one");
    ///
    /// assert!(map.delete(&1));
    /// assert!(!map.delete(&1));
    /// assert!(map.is_empty());
    /// ```
    pub fn delete(&mut self, key: &K) -> bool {
        self.remove_entry(key).is_some()
    }

    /// Removes `key` from the map and returns the entry it held.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let index = self.locate(key)?;
        Some(self.remove_node(index))
    }
}

// =============================================================================
// Invariant Checking
// =============================================================================

#[cfg(test)]
impl<K: fmt::Debug, V, C: Comparator<K>> OrderedMap<K, V, C> {
    /// Panics unless ordering, parent links and the count are all consistent.
    pub(crate) fn assert_invariants(&self) {
        let mut reachable = 0;
        let mut stack: Vec<(NodeIndex, Option<NodeIndex>, Option<NodeIndex>)> =
            self.root.map(|root| (root, None, None)).into_iter().collect();
        if let Some(root) = self.root {
            assert!(self.arena[root].parent.is_none(), "root has a parent");
        }
        while let Some((index, lower, upper)) = stack.pop() {
            reachable += 1;
            let node = &self.arena[index];
            if let Some(lower) = lower {
                assert_eq!(
                    self.comparator.compare(&self.arena[lower].key, &node.key),
                    Ordering::Less,
                    "key {:?} is not above its lower bound",
                    node.key
                );
            }
            if let Some(upper) = upper {
                assert_eq!(
                    self.comparator.compare(&node.key, &self.arena[upper].key),
                    Ordering::Less,
                    "key {:?} is not below its upper bound",
                    node.key
                );
            }
            if let Some(left) = node.left {
                assert_eq!(self.arena[left].parent, Some(index), "broken parent link");
                stack.push((left, lower, Some(index)));
            }
            if let Some(right) = node.right {
                assert_eq!(self.arena[right].parent, Some(index), "broken parent link");
                stack.push((right, Some(index), upper));
            }
        }
        assert_eq!(reachable, self.length, "count differs from reachable nodes");
        assert_eq!(self.arena.occupied(), self.length, "arena holds unreachable nodes");
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V, C: Default> Default for OrderedMap<K, V, C> {
    #[inline]
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<K, V, C: Comparator<K> + Default> FromIterator<(K, V)> for OrderedMap<K, V, C> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<K, V, C: Comparator<K>> Extend<(K, V)> for OrderedMap<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, C> IntoIterator for OrderedMap<K, V, C> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.arena, self.root)
    }
}

impl<'a, K, V, C> IntoIterator for &'a OrderedMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: PartialEq, V: PartialEq, C> PartialEq for OrderedMap<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq, C> Eq for OrderedMap<K, V, C> {}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for OrderedMap<K, V, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display, C> fmt::Display for OrderedMap<K, V, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparator::ReverseOrder;
    use rstest::{fixture, rstest};

    /// The tree built from keys {5, 3, 8, 1, 4}.
    ///
    /// ```text
    ///         5
    ///        / \
    ///       3   8
    ///      / \
    ///     1   4
    /// ```
    #[fixture]
    fn sample() -> OrderedMap<i32, &'static str> {
        let mut map = OrderedMap::new();
        for (key, value) in [(5, "a"), (3, "b"), (8, "c"), (1, "d"), (4, "e")] {
            map.insert(key, value);
        }
        map
    }

    fn keys_of<C>(map: &OrderedMap<i32, &'static str, C>) -> Vec<i32> {
        map.keys().copied().collect()
    }

    #[rstest]
    fn test_display_empty() {
        let map: OrderedMap<i32, i32> = OrderedMap::new();
        assert_eq!(format!("{map}"), "{}");
    }

    #[rstest]
    fn test_display_sorted(sample: OrderedMap<i32, &'static str>) {
        assert_eq!(format!("{sample}"), "{1: d, 3: b, 4: e, 5: a, 8: c}");
    }

    #[rstest]
    fn test_debug(sample: OrderedMap<i32, &'static str>) {
        assert_eq!(
            format!("{sample:?}"),
            r#"{1: "d", 3: "b", 4: "e", 5: "a", 8: "c"}"#
        );
    }

    #[rstest]
    fn test_insert_builds_expected_shape(sample: OrderedMap<i32, &'static str>) {
        sample.assert_invariants();
        let root = sample.root.map(|index| sample.arena[index].key);
        assert_eq!(root, Some(5));
        assert_eq!(sample.height(), 3);
    }

    #[rstest]
    fn test_insert_overwrite_keeps_node(mut sample: OrderedMap<i32, &'static str>) {
        let before = sample.locate(&3);
        sample.insert(3, "z");
        assert_eq!(sample.locate(&3), before);
        assert_eq!(sample.count(), 5);
        assert_eq!(sample.retrieve(&3), "z");
        sample.assert_invariants();
    }

    #[rstest]
    #[case::leaf(1, vec![3, 4, 5, 8])]
    #[case::one_child(8, vec![1, 3, 4, 5])]
    #[case::two_children(3, vec![1, 4, 5, 8])]
    #[case::root(5, vec![1, 3, 4, 8])]
    fn test_delete_cases(
        mut sample: OrderedMap<i32, &'static str>,
        #[case] key: i32,
        #[case] remaining: Vec<i32>,
    ) {
        assert!(sample.delete(&key));
        sample.assert_invariants();
        assert!(!sample.has_key(&key));
        assert_eq!(keys_of(&sample), remaining);
    }

    #[rstest]
    fn test_delete_two_children_reuses_node(mut sample: OrderedMap<i32, &'static str>) {
        let root = sample.root;
        assert!(sample.delete(&5));
        assert_eq!(sample.root, root);
        let root_key = sample.root.map(|index| sample.arena[index].key);
        assert_eq!(root_key, Some(8));
        assert_eq!(sample.retrieve(&8), "c");
    }

    #[rstest]
    fn test_delete_root_with_single_child_promotes_child() {
        let mut map = OrderedMap::new();
        map.insert(1, "one");
        map.insert(2, "two");
        map.insert(3, "three");

        assert!(map.delete(&1));
        map.assert_invariants();
        let root_key = map.root.map(|index| map.arena[index].key);
        assert_eq!(root_key, Some(2));
    }

    #[rstest]
    fn test_delete_absent_key(mut sample: OrderedMap<i32, &'static str>) {
        assert!(!sample.delete(&42));
        assert_eq!(sample.count(), 5);
        sample.assert_invariants();
    }

    #[rstest]
    fn test_delete_everything(mut sample: OrderedMap<i32, &'static str>) {
        for key in [5, 3, 8, 1, 4] {
            assert!(sample.delete(&key));
            sample.assert_invariants();
        }
        assert!(sample.is_empty());
        assert!(sample.root.is_none());
    }

    #[rstest]
    fn test_remove_entry_returns_pair(mut sample: OrderedMap<i32, &'static str>) {
        assert_eq!(sample.remove_entry(&3), Some((3, "b")));
        assert_eq!(sample.remove_entry(&3), None);
    }

    #[rstest]
    fn test_has_value(sample: OrderedMap<i32, &'static str>) {
        assert!(sample.has_value(&"e"));
        assert!(sample.has_value(&"a"));
        assert!(!sample.has_value(&"x"));
    }

    #[rstest]
    fn test_get_mut_updates_value(mut sample: OrderedMap<i32, &'static str>) {
        if let Some(value) = sample.get_mut(&4) {
            *value = "updated";
        }
        assert_eq!(sample.get(&4), Some(&"updated"));
        assert_eq!(sample.get_mut(&40), None);
    }

    #[rstest]
    fn test_extract_first_and_last(mut sample: OrderedMap<i32, &'static str>) {
        assert_eq!(sample.extract_first(), Some((1, "d")));
        assert_eq!(sample.extract_last(), Some((8, "c")));
        sample.assert_invariants();
        assert_eq!(keys_of(&sample), vec![3, 4, 5]);
    }

    #[rstest]
    fn test_extract_until_empty(mut sample: OrderedMap<i32, &'static str>) {
        let mut popped = Vec::new();
        while let Some((key, _)) = sample.extract_last() {
            sample.assert_invariants();
            popped.push(key);
        }
        assert_eq!(popped, vec![8, 5, 4, 3, 1]);
        assert_eq!(sample.extract_first(), None);
    }

    #[rstest]
    fn test_erase_all_then_reuse(mut sample: OrderedMap<i32, &'static str>) {
        sample.erase_all();
        sample.assert_invariants();
        assert!(sample.is_empty());
        sample.insert(10, "ten");
        sample.assert_invariants();
        assert_eq!(sample.count(), 1);
    }

    #[rstest]
    fn test_smallest_and_largest(sample: OrderedMap<i32, &'static str>) {
        assert_eq!(sample.smallest_key(), Ok(&1));
        assert_eq!(sample.largest_key(), Ok(&8));
    }

    #[rstest]
    fn test_smallest_and_largest_empty() {
        let map: OrderedMap<i32, ()> = OrderedMap::new();
        assert_eq!(
            map.smallest_key(),
            Err(EmptyCollectionError {
                method_name: "smallest_key"
            })
        );
        assert_eq!(
            map.largest_key(),
            Err(EmptyCollectionError {
                method_name: "largest_key"
            })
        );
    }

    #[rstest]
    fn test_sorted_insertion_degenerates() {
        let map: OrderedMap<i32, ()> = (0..100).map(|key| (key, ())).collect();
        map.assert_invariants();
        assert_eq!(map.height(), 100);
    }

    #[rstest]
    fn test_reverse_comparator_orders_descending() {
        let mut map = OrderedMap::with_comparator(ReverseOrder(NaturalOrder));
        for (key, value) in [(5, "a"), (3, "b"), (8, "c")] {
            map.insert(key, value);
        }
        map.assert_invariants();
        assert_eq!(keys_of(&map), vec![8, 5, 3]);
        assert_eq!(map.smallest_key(), Ok(&8));
    }

    #[rstest]
    fn test_equality_ignores_shape() {
        let ascending: OrderedMap<i32, i32> = (0..5).map(|key| (key, key)).collect();
        let descending: OrderedMap<i32, i32> = (0..5).rev().map(|key| (key, key)).collect();
        assert_eq!(ascending, descending);
    }

    #[rstest]
    fn test_clone_is_independent(sample: OrderedMap<i32, &'static str>) {
        let mut copy = sample.clone();
        copy.delete(&5);
        assert_eq!(sample.count(), 5);
        assert_eq!(copy.count(), 4);
    }
}
