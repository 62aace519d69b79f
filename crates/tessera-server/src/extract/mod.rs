//! Custom HTTP request extractors.
//!
//! - [`LenientJson`] — JSON body extraction that treats a malformed or
//!   missing body as an empty payload instead of rejecting the request.
//! - [`TokenHeader`] — the optional `token` bearer header.

mod lenient_json;
mod token_header;

pub use lenient_json::LenientJson;
pub use token_header::TokenHeader;
