//! Default mapping from record store errors to HTTP errors.

use tessera_store::StoreError;

use crate::handler::{Error, ErrorKind};

/// Tracing target for storage failures surfaced to clients.
const TRACING_TARGET: &str = "tessera_server::handler::error";

impl From<StoreError> for Error {
    /// Maps an absent record to 404, a duplicate to the conflict kind,
    /// and everything else to a generic 500. Handlers that need a
    /// different mapping (e.g. renew reporting a missing token as 400)
    /// convert explicitly instead.
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => ErrorKind::NotFound.into_error(),
            StoreError::AlreadyExists { .. } => ErrorKind::Conflict.into_error(),
            err => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %err,
                    "record store failure"
                );
                ErrorKind::InternalServerError.into_error()
            }
        }
    }
}
