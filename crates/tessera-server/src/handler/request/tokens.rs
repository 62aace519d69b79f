//! Token request types.

use serde::Deserialize;

use super::{Violations, non_empty, token_key};

/// Request payload for a login.
#[must_use]
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateToken {
    pub user_name: Option<String>,
    pub password: Option<String>,
}

/// A validated [`CreateToken`].
#[derive(Debug, Clone)]
pub struct ValidCreateToken {
    pub user_name: String,
    pub password: String,
}

impl CreateToken {
    /// Validates the payload, returning the violated constraints on
    /// failure.
    pub fn validate(self) -> Result<ValidCreateToken, Violations> {
        let mut violations = Violations::new();

        let user_name = non_empty(self.user_name);
        let password = non_empty(self.password);

        if user_name.is_none() {
            violations.push("userName");
        }
        if password.is_none() {
            violations.push("password");
        }

        match (user_name, password) {
            (Some(user_name), Some(password)) => Ok(ValidCreateToken {
                user_name,
                password,
            }),
            _ => Err(violations),
        }
    }
}

/// Request payload addressing an existing token: the secret (`id` on
/// the wire) and the user name it was issued for. The storage key is
/// derivable only from both together.
#[must_use]
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenKeys {
    pub id: Option<String>,
    pub user_name: Option<String>,
}

/// A validated [`TokenKeys`].
#[derive(Debug, Clone)]
pub struct ValidTokenKeys {
    pub id: String,
    pub user_name: String,
}

impl TokenKeys {
    /// Validates the payload; the `id` must be exactly the digest
    /// length (64 characters).
    pub fn validate(self) -> Result<ValidTokenKeys, Violations> {
        let mut violations = Violations::new();

        let id = token_key(self.id);
        let user_name = non_empty(self.user_name);

        if id.is_none() {
            violations.push("id");
        }
        if user_name.is_none() {
            violations.push("userName");
        }

        match (id, user_name) {
            (Some(id), Some(user_name)) => Ok(ValidTokenKeys { id, user_name }),
            _ => Err(violations),
        }
    }
}

/// Query parameters addressing an existing token; same constraints as
/// [`TokenKeys`].
#[must_use]
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenQuery {
    pub id: Option<String>,
    pub user_name: Option<String>,
}

impl TokenQuery {
    /// Validates the query, returning the violated constraints on
    /// failure.
    pub fn validate(self) -> Result<ValidTokenKeys, Violations> {
        TokenKeys {
            id: self.id,
            user_name: self.user_name,
        }
        .validate()
    }
}
