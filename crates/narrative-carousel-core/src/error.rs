//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// A component family was requested from the registry but never registered.
    #[error("configuration error: component family `{0}` is not registered")]
    UnregisteredFamily(String),

    /// An item index outside the collection was requested.
    #[error("index {index} out of range for {item_count} items")]
    OutOfRange {
        /// The requested index.
        index: usize,
        /// Number of items in the collection.
        item_count: usize,
    },

    /// The collection has no items, so no metrics or stage exist.
    #[error("collection has no items")]
    DegenerateCollection,
}
