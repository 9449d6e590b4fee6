//! Binary search tree map.
//!
//! This module provides [`OrderedMap`], a mutable ordered map stored as an
//! unbalanced binary search tree whose nodes carry a parent back-reference.
//!
//! - Point operations: [`insert`](OrderedMap::insert),
//!   [`delete`](OrderedMap::delete), [`has_key`](OrderedMap::has_key),
//!   [`retrieve`](OrderedMap::retrieve), [`has_value`](OrderedMap::has_value)
//! - Navigation: [`find_floor`](OrderedMap::find_floor),
//!   [`find_ceiling`](OrderedMap::find_ceiling),
//!   [`find_predecessor`](OrderedMap::find_predecessor),
//!   [`find_successor`](OrderedMap::find_successor) and their `*_key` forms
//! - Extraction: [`extract_preceding`](OrderedMap::extract_preceding),
//!   [`extract_range`](OrderedMap::extract_range),
//!   [`extract_succeeding`](OrderedMap::extract_succeeding)
//! - Popping: [`extract_first`](OrderedMap::extract_first),
//!   [`extract_last`](OrderedMap::extract_last)
//!
//! # Absent Keys
//!
//! Most lookups report a missing key softly. [`retrieve`](OrderedMap::retrieve)
//! and the `*_key` navigation forms return the type's default value, which is
//! indistinguishable from a stored default. Use [`get`](OrderedMap::get),
//! [`has_key`](OrderedMap::has_key) or the node-form queries when the
//! distinction matters. Only [`smallest_key`](OrderedMap::smallest_key) and
//! [`largest_key`](OrderedMap::largest_key) fail hard, with an
//! [`EmptyCollectionError`](crate::error::EmptyCollectionError).
//!
//! # Examples
//!
//! ```rust
//! use bst_ordmap::tree::OrderedMap;
//!
//! let mut map = OrderedMap::new();
//! for (key, value) in [(5, "a"), (3, "b"), (8, "c"), (1, "d"), (4, "e")] {
//!     map.insert(key, value);
//! }
//!
//! assert_eq!(map.find_floor(&6).map(|node| *node.key()), Some(5));
//! assert_eq!(map.find_successor(&5).map(|node| *node.key()), Some(8));
//!
//! let range = map.extract_range(&3, &8);
//! assert_eq!(range.get_all_entries(), vec![(3, "b"), (4, "e"), (5, "a")]);
//! assert_eq!(map.count(), 5);
//!
//! assert_eq!(map.extract_first(), Some((1, "d")));
//! assert_eq!(map.count(), 4);
//! ```

/// Inline capacity of traversal stacks before they spill to the heap.
const TRAVERSAL_STACK_INLINE: usize = 32;

mod extraction;
mod iterator;
mod navigation;
mod node;
mod ordered_map;

pub use iterator::{IntoIter, Iter, Keys, Values};
pub use node::NodeRef;
pub use ordered_map::OrderedMap;

// =============================================================================
// Compile-time Checks
// =============================================================================

static_assertions::assert_impl_all!(OrderedMap<i32, String>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(NodeRef<'static, i32, String>: Copy);
static_assertions::assert_not_impl_any!(OrderedMap<std::rc::Rc<i32>, ()>: Send, Sync);
