//! Persisted record types.
//!
//! Field names are serialized in `camelCase` and match the on-disk JSON
//! layout one to one; these types are the collaborator contract between
//! the store and the API layer.

mod account;
mod token;

pub use account::AccountRecord;
pub use token::TokenRecord;
