//! Store error types.

use thiserror::Error;

use crate::Collection;

/// Type alias for Results with [`StoreError`].
pub type Result<T, E = StoreError> = std::result::Result<T, E>;

/// The error type for record store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record exists under the given key.
    #[error("no record {key:?} in collection {collection}")]
    NotFound {
        /// Collection that was queried.
        collection: Collection,
        /// Key that was not found.
        key: String,
    },

    /// A record already exists under the given key.
    #[error("record {key:?} already exists in collection {collection}")]
    AlreadyExists {
        /// Collection that was written to.
        collection: Collection,
        /// Key that collided.
        key: String,
    },

    /// The key cannot be used as a file name.
    #[error("invalid record key {key:?}")]
    InvalidKey {
        /// The rejected key.
        key: String,
    },

    /// Underlying filesystem failure.
    #[error("failed to access record file")]
    Io(#[from] std::io::Error),

    /// Record contents could not be (de)serialized.
    #[error("failed to serialize or deserialize record")]
    Serde(#[from] serde_json::Error),
}

impl StoreError {
    /// Returns `true` if this error means the record was absent.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns `true` if this error means the record already existed.
    #[must_use]
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. })
    }
}
