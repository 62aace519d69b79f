//! Handler error types and conversions from collaborator errors.

mod auth_error;
mod http_error;
mod store_error;

pub use http_error::{Error, ErrorKind, Result};
