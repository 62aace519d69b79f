//! Service layer error types.

use thiserror::Error;

/// Result type alias for service layer operations.
pub type Result<T, E = ServiceError> = std::result::Result<T, E>;

/// Errors raised while assembling the service state.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The hashing secret could not be turned into a keyed hash.
    #[error("failed to construct the keyed hash")]
    Crypto(#[from] tessera_core::Error),

    /// The record store could not be opened.
    #[error("failed to open the record store")]
    Store(#[from] tessera_store::StoreError),
}
