//! Account request types.

use serde::Deserialize;

use super::{Violations, non_empty};

/// Request payload to create an account.
///
/// All fields are required; `tos_agreement` must be explicitly `true`.
#[must_use]
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateAccount {
    pub user_name: Option<String>,
    pub email_address: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub street_address: Option<String>,
    pub password: Option<String>,
    pub tos_agreement: Option<bool>,
}

/// A validated [`CreateAccount`] with every field present.
#[derive(Debug, Clone)]
pub struct ValidCreateAccount {
    pub user_name: String,
    pub email_address: String,
    pub first_name: String,
    pub last_name: String,
    pub street_address: String,
    pub password: String,
}

impl CreateAccount {
    /// Validates the payload, returning the violated constraints on
    /// failure.
    pub fn validate(self) -> Result<ValidCreateAccount, Violations> {
        let mut violations = Violations::new();

        let user_name = non_empty(self.user_name);
        let email_address = non_empty(self.email_address);
        let first_name = non_empty(self.first_name);
        let last_name = non_empty(self.last_name);
        let street_address = non_empty(self.street_address);
        let password = non_empty(self.password);

        if user_name.is_none() {
            violations.push("userName");
        }
        if email_address.is_none() {
            violations.push("emailAddress");
        }
        if first_name.is_none() {
            violations.push("firstName");
        }
        if last_name.is_none() {
            violations.push("lastName");
        }
        if street_address.is_none() {
            violations.push("streetAddress");
        }
        if password.is_none() {
            violations.push("password");
        }
        if self.tos_agreement != Some(true) {
            violations.push("tosAgreement");
        }

        match (
            user_name,
            email_address,
            first_name,
            last_name,
            street_address,
            password,
        ) {
            (
                Some(user_name),
                Some(email_address),
                Some(first_name),
                Some(last_name),
                Some(street_address),
                Some(password),
            ) if violations.is_empty() => Ok(ValidCreateAccount {
                user_name,
                email_address,
                first_name,
                last_name,
                street_address,
                password,
            }),
            _ => Err(violations),
        }
    }
}

/// Request payload to update an account.
///
/// `user_name` selects the account; at least one mutable field must be
/// supplied.
#[must_use]
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateAccount {
    pub user_name: Option<String>,
    pub email_address: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub street_address: Option<String>,
    pub password: Option<String>,
}

/// A validated [`UpdateAccount`]: the user name plus at least one
/// mutable field.
#[derive(Debug, Clone)]
pub struct ValidUpdateAccount {
    pub user_name: String,
    pub email_address: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub street_address: Option<String>,
    pub password: Option<String>,
}

impl UpdateAccount {
    /// Validates the payload, returning the violated constraints on
    /// failure.
    pub fn validate(self) -> Result<ValidUpdateAccount, Violations> {
        let mut violations = Violations::new();

        let user_name = non_empty(self.user_name);
        if user_name.is_none() {
            violations.push("userName");
        }

        let update = ValidUpdateAccount {
            user_name: user_name.unwrap_or_default(),
            email_address: non_empty(self.email_address),
            first_name: non_empty(self.first_name),
            last_name: non_empty(self.last_name),
            street_address: non_empty(self.street_address),
            password: non_empty(self.password),
        };

        if !update.has_updates() {
            violations.push(
                "one of emailAddress, firstName, lastName, streetAddress, password",
            );
        }

        if violations.is_empty() {
            Ok(update)
        } else {
            Err(violations)
        }
    }
}

impl ValidUpdateAccount {
    /// Returns `true` if at least one mutable field was supplied.
    fn has_updates(&self) -> bool {
        self.email_address.is_some()
            || self.first_name.is_some()
            || self.last_name.is_some()
            || self.street_address.is_some()
            || self.password.is_some()
    }
}

/// Query parameters selecting an account.
#[must_use]
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountQuery {
    pub user_name: Option<String>,
}

impl AccountQuery {
    /// Returns the trimmed user name, if one was supplied.
    pub fn user_name(self) -> Option<String> {
        non_empty(self.user_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_create() -> CreateAccount {
        CreateAccount {
            user_name: Some("alice".to_owned()),
            email_address: Some("alice@example.com".to_owned()),
            first_name: Some("Alice".to_owned()),
            last_name: Some("Smith".to_owned()),
            street_address: Some("1 Main St".to_owned()),
            password: Some("hunter2!".to_owned()),
            tos_agreement: Some(true),
        }
    }

    #[test]
    fn complete_payload_validates() {
        let valid = full_create().validate().expect("valid");
        assert_eq!(valid.user_name, "alice");
    }

    #[test]
    fn missing_fields_are_listed_in_order() {
        let payload = CreateAccount {
            user_name: None,
            password: Some("   ".to_owned()),
            ..full_create()
        };

        let violations = payload.validate().expect_err("invalid");
        assert_eq!(violations, vec!["userName", "password"]);
    }

    #[test]
    fn tos_must_be_explicitly_true() {
        for tos in [None, Some(false)] {
            let payload = CreateAccount {
                tos_agreement: tos,
                ..full_create()
            };
            let violations = payload.validate().expect_err("invalid");
            assert_eq!(violations, vec!["tosAgreement"]);
        }
    }

    #[test]
    fn update_requires_user_name() {
        let payload = UpdateAccount {
            email_address: Some("new@example.com".to_owned()),
            ..UpdateAccount::default()
        };
        let violations = payload.validate().expect_err("invalid");
        assert_eq!(violations, vec!["userName"]);
    }

    #[test]
    fn update_requires_at_least_one_field() {
        let payload = UpdateAccount {
            user_name: Some("alice".to_owned()),
            ..UpdateAccount::default()
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn update_with_one_field_validates() {
        let payload = UpdateAccount {
            user_name: Some("alice".to_owned()),
            street_address: Some("2 Side St".to_owned()),
            ..UpdateAccount::default()
        };
        let valid = payload.validate().expect("valid");
        assert_eq!(valid.street_address.as_deref(), Some("2 Side St"));
        assert!(valid.password.is_none());
    }
}
