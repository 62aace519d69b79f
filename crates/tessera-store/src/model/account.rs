//! Account records.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored account, keyed in the `users` collection by `user_name`.
///
/// `account_id` and `password_hash` are internal fields; the API layer
/// is responsible for stripping them before a record leaves the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRecord {
    /// Opaque identifier generated at creation; never used for lookup.
    pub account_id: Uuid,
    /// Unique natural key; immutable after creation.
    pub user_name: String,
    /// Contact email address.
    pub email_address: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Postal street address.
    pub street_address: String,
    /// One-way hash of the password; never serialized to API responses.
    pub password_hash: String,
    /// Terms-of-service acceptance; must be `true` at creation.
    pub tos_agreement: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_field_names() {
        let record = AccountRecord {
            account_id: Uuid::nil(),
            user_name: "alice".to_owned(),
            email_address: "alice@example.com".to_owned(),
            first_name: "Alice".to_owned(),
            last_name: "Smith".to_owned(),
            street_address: "1 Main St".to_owned(),
            password_hash: "ab".repeat(32),
            tos_agreement: true,
        };

        let value = serde_json::to_value(&record).expect("serialize");
        let object = value.as_object().expect("object");
        for field in [
            "accountId",
            "userName",
            "emailAddress",
            "firstName",
            "lastName",
            "streetAddress",
            "passwordHash",
            "tosAgreement",
        ] {
            assert!(object.contains_key(field), "missing {field}");
        }
    }
}
