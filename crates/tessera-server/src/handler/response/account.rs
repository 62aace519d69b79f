//! Account response types.

use serde::{Deserialize, Serialize};
use tessera_store::model::AccountRecord;

/// A sanitized account, safe to return to the client.
///
/// Deliberately has no `account_id` or `password_hash` field, so a
/// stored record cannot reach the wire without passing through
/// [`Account::from_record`].
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Unique user name.
    pub user_name: String,
    /// Contact email address.
    pub email_address: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Postal street address.
    pub street_address: String,
    /// Terms-of-service acceptance.
    pub tos_agreement: bool,
}

impl Account {
    /// Creates a response from a stored record, dropping the internal
    /// identifier and the password hash.
    pub fn from_record(record: AccountRecord) -> Self {
        Self {
            user_name: record.user_name,
            email_address: record.email_address,
            first_name: record.first_name,
            last_name: record.last_name,
            street_address: record.street_address,
            tos_agreement: record.tos_agreement,
        }
    }
}
