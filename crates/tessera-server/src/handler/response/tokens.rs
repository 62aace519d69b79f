//! Token response types.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Response to a successful login.
///
/// `token_key` is the private secret, not the storage key: the server
/// derives the storage key from (user name + secret) and never sends it
/// back here. The wire field name `tokenKey` is part of the public
/// contract and must not change.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuedToken {
    /// The bearer credential to present in the `token` header.
    pub token_key: String,
    /// Expiry time as millisecond epoch.
    #[serde(with = "jiff::fmt::serde::timestamp::millisecond::required")]
    pub expires: Timestamp,
}
