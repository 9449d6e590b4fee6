//! # bst-ordmap
//!
//! An in-memory ordered map backed by an unbalanced binary search tree.
//!
//! ## Overview
//!
//! [`OrderedMap`](tree::OrderedMap) is a key→value container ordered by a
//! configurable [`Comparator`](comparator::Comparator). Beyond the usual map
//! operations it provides:
//!
//! - **Navigation**: floor, ceiling, predecessor and successor queries
//! - **Extraction**: non-destructive sub-maps (`extract_preceding`,
//!   `extract_range`, `extract_succeeding`)
//! - **Popping**: destructive `extract_first` / `extract_last`
//!
//! The tree is never rebalanced. Inserting keys in sorted order produces a
//! tree whose height equals its length; every traversal therefore uses an
//! explicit stack instead of recursion.
//!
//! ## Feature Flags
//!
//! - `tree`: The [`tree`] module (enabled by default)
//! - `tracing`: Emit `tracing` events for structural mutations (enabled by default)
//!
//! ## Example
//!
//! ```rust
//! use bst_ordmap::prelude::*;
//!
//! let mut map = OrderedMap::new();
//! map.insert(5, "a");
//! map.insert(3, "b");
//! map.insert(8, "c");
//!
//! assert_eq!(map.floor_key(&6), 5);
//! assert_eq!(map.ceiling_key(&6), 8);
//! assert_eq!(map.smallest_key(), Ok(&3));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use bst_ordmap::prelude::*;
/// ```
pub mod prelude {
    pub use crate::comparator::*;
    pub use crate::error::*;

    #[cfg(feature = "tree")]
    pub use crate::tree::*;
}

#[macro_use]
mod macros;

pub mod comparator;
pub mod error;

#[cfg(feature = "tree")]
pub mod tree;
