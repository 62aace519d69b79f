//! Request payload types.
//!
//! Every field arrives as an `Option`; a `validate()` step trims each
//! value, treats empty-after-trim as absent, and either produces a
//! fully-populated struct or the list of violated constraints. Handlers
//! turn violations into a 400 before touching storage.

mod accounts;
mod tokens;

pub use accounts::{AccountQuery, CreateAccount, UpdateAccount, ValidCreateAccount,
    ValidUpdateAccount};
pub use tokens::{CreateToken, TokenKeys, TokenQuery, ValidCreateToken, ValidTokenKeys};

use tessera_core::crypto::DIGEST_LEN;

/// Violated field constraints, in declaration order.
pub type Violations = Vec<&'static str>;

/// Trims a field and maps empty-after-trim to absent.
fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

/// Trims a token key field, requiring the exact digest length.
fn token_key(value: Option<String>) -> Option<String> {
    non_empty(value).filter(|value| value.len() == DIGEST_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_trims_and_drops_blank() {
        assert_eq!(non_empty(Some("  alice ".to_owned())).as_deref(), Some("alice"));
        assert_eq!(non_empty(Some("   ".to_owned())), None);
        assert_eq!(non_empty(None), None);
    }

    #[test]
    fn token_key_requires_digest_length() {
        assert_eq!(token_key(Some("short".to_owned())), None);
        let full = "a".repeat(DIGEST_LEN);
        assert_eq!(token_key(Some(full.clone())).as_deref(), Some(full.as_str()));
    }
}
