//! Default mapping from authenticator errors to HTTP errors.

use crate::handler::{Error, ErrorKind};
use crate::service::auth::AuthError;

/// Tracing target for auth failures surfaced to clients.
const TRACING_TARGET: &str = "tessera_server::handler::error";

impl From<AuthError> for Error {
    /// Maps credential and token failures to 400 with the message the
    /// public contract specifies, and storage failures to a generic 500.
    /// Revocation surfaces a missing token as 404 and converts
    /// explicitly in its handler instead of going through here.
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AccountNotFound => ErrorKind::BadRequest
                .with_message("Could not find the specified user")
                .with_resource("account"),
            AuthError::InvalidCredentials => ErrorKind::BadRequest
                .with_message("The password did not match the specified user's stored password"),
            AuthError::TokenNotFound => ErrorKind::BadRequest
                .with_message("Specified token does not exist")
                .with_resource("token"),
            AuthError::TokenExpired => ErrorKind::BadRequest
                .with_message("The token is already expired and cannot be extended")
                .with_resource("token"),
            AuthError::Storage(err) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %err,
                    "record store failure during authentication"
                );
                ErrorKind::InternalServerError.into_error()
            }
        }
    }
}
