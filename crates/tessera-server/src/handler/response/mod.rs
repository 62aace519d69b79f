//! Response payload types.

mod account;
mod error_response;
mod tokens;

pub use account::Account;
pub use error_response::ErrorResponse;
pub use tokens::IssuedToken;

use serde::Serialize;

/// The empty JSON object body.
///
/// Every response carries a JSON object; success responses with nothing
/// to say carry this one.
#[derive(Debug, Default, Clone, Copy, Serialize)]
pub struct Empty {}
