//! Key ordering strategies.
//!
//! An [`OrderedMap`](crate::tree::OrderedMap) never calls `Ord::cmp` on its
//! keys directly; it asks its [`Comparator`] instead. This lets one key type
//! be indexed under several orders.
//!
//! - [`NaturalOrder`]: the key type's own `Ord` implementation (the default)
//! - [`ReverseOrder`]: inverts another comparator
//! - [`FallbackOrder`]: a supplied comparator, or natural order if none was given
//! - Any `Fn(&K, &K) -> Ordering` closure or function pointer
//!
//! # Examples
//!
//! ```rust
//! use bst_ordmap::comparator::{Comparator, NaturalOrder, ReverseOrder};
//! use std::cmp::Ordering;
//!
//! assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
//! assert_eq!(ReverseOrder(NaturalOrder).compare(&1, &2), Ordering::Greater);
//!
//! let by_length = |left: &&str, right: &&str| left.len().cmp(&right.len());
//! assert_eq!(by_length.compare(&"abc", &"de"), Ordering::Greater);
//! ```

use std::cmp::Ordering;

/// A total order over keys of type `K`.
///
/// Implementations must be consistent: `compare(a, b)` returns `Equal` exactly
/// when `a` and `b` denote the same map slot, and the relation must be
/// transitive. An inconsistent comparator does not cause undefined behavior,
/// but lookups may miss entries that were inserted.
pub trait Comparator<K: ?Sized> {
    /// Compares two keys.
    fn compare(&self, left: &K, right: &K) -> Ordering;
}

impl<K: ?Sized, F> Comparator<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, left: &K, right: &K) -> Ordering {
        self(left, right)
    }
}

/// Orders keys by their `Ord` implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<K: Ord + ?Sized> Comparator<K> for NaturalOrder {
    #[inline]
    fn compare(&self, left: &K, right: &K) -> Ordering {
        left.cmp(right)
    }
}

/// Inverts the order of the wrapped comparator.
///
/// # Examples
///
/// ```rust
/// use bst_ordmap::comparator::{NaturalOrder, ReverseOrder};
/// use bst_ordmap::tree::OrderedMap;
///
/// let mut map = OrderedMap::with_comparator(ReverseOrder(NaturalOrder));
/// map.insert(1, "one");
/// map.insert(3, "three");
/// map.insert(2, "two");
///
/// assert_eq!(map.extract_keys(), vec![3, 2, 1]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ReverseOrder<C>(pub C);

impl<K: ?Sized, C: Comparator<K>> Comparator<K> for ReverseOrder<C> {
    #[inline]
    fn compare(&self, left: &K, right: &K) -> Ordering {
        self.0.compare(right, left)
    }
}

/// A supplied comparator, or natural order when none was supplied.
///
/// Built by [`OrderedMap::with_optional_comparator`](crate::tree::OrderedMap::with_optional_comparator).
///
/// # Examples
///
/// ```rust
/// use bst_ordmap::comparator::{Comparator, FallbackOrder, ReverseOrder, NaturalOrder};
/// use std::cmp::Ordering;
///
/// let fallback: FallbackOrder<ReverseOrder<NaturalOrder>> = FallbackOrder::new(None);
/// assert_eq!(fallback.compare(&1, &2), Ordering::Less);
///
/// let supplied = FallbackOrder::new(Some(ReverseOrder(NaturalOrder)));
/// assert_eq!(supplied.compare(&1, &2), Ordering::Greater);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FallbackOrder<C> {
    supplied: Option<C>,
}

impl<C> FallbackOrder<C> {
    /// Wraps an optional comparator.
    #[inline]
    #[must_use]
    pub const fn new(supplied: Option<C>) -> Self {
        Self { supplied }
    }

    /// Returns the supplied comparator, if any.
    #[inline]
    #[must_use]
    pub const fn supplied(&self) -> Option<&C> {
        self.supplied.as_ref()
    }
}

impl<C> Default for FallbackOrder<C> {
    #[inline]
    fn default() -> Self {
        Self::new(None)
    }
}

impl<K: Ord + ?Sized, C: Comparator<K>> Comparator<K> for FallbackOrder<C> {
    #[inline]
    fn compare(&self, left: &K, right: &K) -> Ordering {
        match &self.supplied {
            Some(comparator) => comparator.compare(left, right),
            None => NaturalOrder.compare(left, right),
        }
    }
}
