//! Session token records.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A stored session token, keyed in the `tokens` collection by `token_id`.
///
/// The record never holds the client-side secret: `token_id` is the hash
/// of (user name + secret), so resolving a record requires both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRecord {
    /// Derived storage key, a hex digest of (user name + secret).
    pub token_id: String,
    /// Absolute expiry time, stored as millisecond epoch.
    #[serde(with = "jiff::fmt::serde::timestamp::millisecond::required")]
    pub expires: Timestamp,
}

impl TokenRecord {
    /// Returns `true` once the expiry time has passed.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires <= Timestamp::now()
    }
}
