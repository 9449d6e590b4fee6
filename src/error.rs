//! Error types for the ordered map.
//!
//! Almost every "not found" case in [`OrderedMap`](crate::tree::OrderedMap)
//! is reported softly, either as `None` or as the type's default value.
//! The single hard failure is asking an empty map for its smallest or
//! largest key, which is reported as an [`EmptyCollectionError`].

/// Represents an error when a key is requested from an empty collection.
///
/// # Examples
///
/// ```rust
/// use bst_ordmap::error::EmptyCollectionError;
///
/// let error = EmptyCollectionError {
///     method_name: "smallest_key",
/// };
/// assert_eq!(format!("{error}"), "smallest_key: collection is empty");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyCollectionError {
    /// The name of the method that required a non-empty collection.
    pub method_name: &'static str,
}

impl std::fmt::Display for EmptyCollectionError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}: collection is empty", self.method_name)
    }
}

impl std::error::Error for EmptyCollectionError {}

/// Represents errors that can occur in this crate.
///
/// # Examples
///
/// ```rust
/// use bst_ordmap::error::{EmptyCollectionError, OrderedMapError};
///
/// let error: OrderedMapError = EmptyCollectionError {
///     method_name: "largest_key",
/// }
/// .into();
/// assert_eq!(format!("{error}"), "largest_key: collection is empty");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderedMapError {
    /// The collection held no entries.
    EmptyCollection(EmptyCollectionError),
}

impl std::fmt::Display for OrderedMapError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCollection(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for OrderedMapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EmptyCollection(error) => Some(error),
        }
    }
}

impl From<EmptyCollectionError> for OrderedMapError {
    fn from(error: EmptyCollectionError) -> Self {
        Self::EmptyCollection(error)
    }
}
