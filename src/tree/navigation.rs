//! Order navigation: floor, ceiling, predecessor and successor queries.
//!
//! Every query is a single descent from the root that remembers the best
//! candidate seen so far. The node-form queries return a [`NodeRef`]; the
//! `*_key` forms return the located key or `K::default()` when no node
//! qualifies.

use std::cmp::Ordering;

use super::node::{NodeIndex, NodeRef};
use super::ordered_map::OrderedMap;
use crate::comparator::Comparator;

impl<K, V, C: Comparator<K>> OrderedMap<K, V, C> {
    fn node_ref(&self, index: Option<NodeIndex>) -> Option<NodeRef<'_, K, V>> {
        index.map(|index| NodeRef::new(&self.arena, index))
    }

    fn floor_index(&self, key: &K) -> Option<NodeIndex> {
        let mut cursor = self.root;
        let mut best = None;
        while let Some(index) = cursor {
            let node = &self.arena[index];
            cursor = match self.comparator.compare(&node.key, key) {
                Ordering::Equal => return Some(index),
                Ordering::Less => {
                    best = Some(index);
                    node.right
                }
                Ordering::Greater => node.left,
            };
        }
        best
    }

    fn ceiling_index(&self, key: &K) -> Option<NodeIndex> {
        let mut cursor = self.root;
        let mut best = None;
        while let Some(index) = cursor {
            let node = &self.arena[index];
            cursor = match self.comparator.compare(&node.key, key) {
                Ordering::Equal => return Some(index),
                Ordering::Greater => {
                    best = Some(index);
                    node.left
                }
                Ordering::Less => node.right,
            };
        }
        best
    }

    fn predecessor_index(&self, key: &K) -> Option<NodeIndex> {
        let mut cursor = self.root;
        let mut candidate = None;
        while let Some(index) = cursor {
            let node = &self.arena[index];
            cursor = if self.comparator.compare(&node.key, key) == Ordering::Less {
                candidate = Some(index);
                node.right
            } else {
                node.left
            };
        }
        candidate
    }

    fn successor_index(&self, key: &K) -> Option<NodeIndex> {
        let mut cursor = self.root;
        let mut candidate = None;
        while let Some(index) = cursor {
            let node = &self.arena[index];
            cursor = if self.comparator.compare(&node.key, key) == Ordering::Greater {
                candidate = Some(index);
                node.left
            } else {
                node.right
            };
        }
        candidate
    }

    /// Returns the node with the largest key less than or equal to `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bst_ordmap::tree::OrderedMap;
    ///
    /// let map: OrderedMap<i32, char> = [(5, 'a'), (3, 'b'), (8, 'c')].into_iter().collect();
    ///
    /// assert_eq!(map.find_floor(&6).map(|node| *node.key()), Some(5));
    /// assert_eq!(map.find_floor(&5).map(|node| *node.key()), Some(5));
    /// assert!(map.find_floor(&2).is_none());
    /// ```
    #[must_use]
    pub fn find_floor(&self, key: &K) -> Option<NodeRef<'_, K, V>> {
        self.node_ref(self.floor_index(key))
    }

    /// Returns the node with the smallest key greater than or equal to `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bst_ordmap::tree::OrderedMap;
    ///
    /// let map: OrderedMap<i32, char> = [(5, 'a'), (3, 'b'), (8, 'c')].into_iter().collect();
    ///
    /// assert_eq!(map.find_ceiling(&6).map(|node| *node.key()), Some(8));
    /// assert!(map.find_ceiling(&9).is_none());
    /// ```
    #[must_use]
    pub fn find_ceiling(&self, key: &K) -> Option<NodeRef<'_, K, V>> {
        self.node_ref(self.ceiling_index(key))
    }

    /// Returns the node with the largest key strictly less than `key`.
    ///
    /// Unlike [`find_floor`](Self::find_floor), an exact match is skipped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bst_ordmap::tree::OrderedMap;
    ///
    /// let map: OrderedMap<i32, char> = [(5, 'a'), (3, 'b'), (8, 'c')].into_iter().collect();
    ///
    /// assert_eq!(map.find_predecessor(&5).map(|node| *node.key()), Some(3));
    /// assert!(map.find_predecessor(&3).is_none());
    /// ```
    #[must_use]
    pub fn find_predecessor(&self, key: &K) -> Option<NodeRef<'_, K, V>> {
        self.node_ref(self.predecessor_index(key))
    }

    /// Returns the node with the smallest key strictly greater than `key`.
    #[must_use]
    pub fn find_successor(&self, key: &K) -> Option<NodeRef<'_, K, V>> {
        self.node_ref(self.successor_index(key))
    }

    /// Returns the floor key of `key`, or `K::default()` if there is none.
    ///
    /// A returned default cannot be told apart from a stored default key;
    /// use [`find_floor`](Self::find_floor) when the difference matters.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bst_ordmap::tree::OrderedMap;
    ///
    /// let map: OrderedMap<i32, ()> = [(5, ()), (8, ())].into_iter().collect();
    /// assert_eq!(map.floor_key(&6), 5);
    /// assert_eq!(map.floor_key(&1), 0);
    /// ```
    #[must_use]
    pub fn floor_key(&self, key: &K) -> K
    where
        K: Default + Clone,
    {
        self.find_floor(key)
            .map(|node| node.key().clone())
            .unwrap_or_default()
    }

    /// Returns the ceiling key of `key`, or `K::default()` if there is none.
    #[must_use]
    pub fn ceiling_key(&self, key: &K) -> K
    where
        K: Default + Clone,
    {
        self.find_ceiling(key)
            .map(|node| node.key().clone())
            .unwrap_or_default()
    }

    /// Returns the predecessor key of `key`, or `K::default()` if there is none.
    #[must_use]
    pub fn predecessor_key(&self, key: &K) -> K
    where
        K: Default + Clone,
    {
        self.find_predecessor(key)
            .map(|node| node.key().clone())
            .unwrap_or_default()
    }

    /// Returns the successor key of `key`, or `K::default()` if there is none.
    #[must_use]
    pub fn successor_key(&self, key: &K) -> K
    where
        K: Default + Clone,
    {
        self.find_successor(key)
            .map(|node| node.key().clone())
            .unwrap_or_default()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::tree::OrderedMap;
    use rstest::{fixture, rstest};

    #[fixture]
    fn sample() -> OrderedMap<i32, &'static str> {
        [(5, "a"), (3, "b"), (8, "c"), (1, "d"), (4, "e")]
            .into_iter()
            .collect()
    }

    fn key_of(node: Option<crate::tree::NodeRef<'_, i32, &'static str>>) -> Option<i32> {
        node.map(|node| *node.key())
    }

    #[rstest]
    #[case(6, Some(5))]
    #[case(5, Some(5))]
    #[case(2, Some(1))]
    #[case(100, Some(8))]
    #[case(0, None)]
    fn test_find_floor(
        sample: OrderedMap<i32, &'static str>,
        #[case] target: i32,
        #[case] expected: Option<i32>,
    ) {
        assert_eq!(key_of(sample.find_floor(&target)), expected);
    }

    #[rstest]
    #[case(6, Some(8))]
    #[case(4, Some(4))]
    #[case(2, Some(3))]
    #[case(-10, Some(1))]
    #[case(9, None)]
    fn test_find_ceiling(
        sample: OrderedMap<i32, &'static str>,
        #[case] target: i32,
        #[case] expected: Option<i32>,
    ) {
        assert_eq!(key_of(sample.find_ceiling(&target)), expected);
    }

    #[rstest]
    #[case(5, Some(4))]
    #[case(4, Some(3))]
    #[case(6, Some(5))]
    #[case(1, None)]
    #[case(0, None)]
    fn test_find_predecessor(
        sample: OrderedMap<i32, &'static str>,
        #[case] target: i32,
        #[case] expected: Option<i32>,
    ) {
        assert_eq!(key_of(sample.find_predecessor(&target)), expected);
    }

    #[rstest]
    #[case(5, Some(8))]
    #[case(4, Some(5))]
    #[case(0, Some(1))]
    #[case(8, None)]
    #[case(50, None)]
    fn test_find_successor(
        sample: OrderedMap<i32, &'static str>,
        #[case] target: i32,
        #[case] expected: Option<i32>,
    ) {
        assert_eq!(key_of(sample.find_successor(&target)), expected);
    }

    #[rstest]
    fn test_key_wrappers_fall_back_to_default(sample: OrderedMap<i32, &'static str>) {
        assert_eq!(sample.floor_key(&0), 0);
        assert_eq!(sample.ceiling_key(&9), 0);
        assert_eq!(sample.predecessor_key(&1), 0);
        assert_eq!(sample.successor_key(&8), 0);
    }

    #[rstest]
    fn test_key_wrappers_found(sample: OrderedMap<i32, &'static str>) {
        assert_eq!(sample.floor_key(&6), 5);
        assert_eq!(sample.ceiling_key(&6), 8);
        assert_eq!(sample.predecessor_key(&5), 4);
        assert_eq!(sample.successor_key(&5), 8);
    }

    #[rstest]
    fn test_node_value_is_reachable(sample: OrderedMap<i32, &'static str>) {
        let node = sample.find_ceiling(&2);
        assert_eq!(node.map(|node| node.entry()), Some((&3, &"b")));
    }

    #[rstest]
    fn test_empty_map_has_no_neighbours() {
        let map: OrderedMap<i32, ()> = OrderedMap::new();
        assert!(map.find_floor(&1).is_none());
        assert!(map.find_ceiling(&1).is_none());
        assert!(map.find_predecessor(&1).is_none());
        assert!(map.find_successor(&1).is_none());
    }
}
