//! Session token issuance, verification, renewal and revocation.

use jiff::{SignedDuration, Timestamp};
use tessera_core::crypto::{Hasher, random_string};
use tessera_store::model::{AccountRecord, TokenRecord};
use tessera_store::{Collection, FileStore, StoreError};
use thiserror::Error;

/// Tracing target for authentication operations.
const TRACING_TARGET: &str = "tessera_server::service::auth";

/// Length of the random seed folded into a new secret.
const SECRET_SEED_LEN: usize = 20;

/// The error type for authenticator operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No account exists for the given user name.
    #[error("no account exists for that user name")]
    AccountNotFound,

    /// The password hash did not match the stored one.
    #[error("password does not match the stored password")]
    InvalidCredentials,

    /// No token record exists for the derived key.
    #[error("no token exists for that user name and key")]
    TokenNotFound,

    /// The token exists but its expiry has passed.
    #[error("token is already expired")]
    TokenExpired,

    /// Underlying record store failure.
    #[error("record store failure")]
    Storage(#[source] StoreError),
}

/// A freshly issued credential, returned to the client once.
///
/// Holds the private secret; the derived storage key stays inside the
/// authenticator.
#[derive(Debug, Clone)]
pub struct IssuedCredential {
    /// The bearer secret.
    pub secret: String,
    /// Absolute expiry time.
    pub expires: Timestamp,
}

/// Issues, verifies, renews and revokes session tokens.
///
/// A token's storage key is `hash(user_name + secret)`: resolving a
/// record requires possession of the secret *and* knowledge of the user
/// name. That derivation is the system's entire authorization
/// mechanism; there are no roles or scopes.
#[derive(Debug, Clone)]
pub struct TokenAuthenticator {
    store: FileStore,
    hasher: Hasher,
    ttl: SignedDuration,
}

impl TokenAuthenticator {
    /// Creates an authenticator over the given store and keyed hash.
    #[must_use]
    pub fn new(store: FileStore, hasher: Hasher, ttl: SignedDuration) -> Self {
        Self { store, hasher, ttl }
    }

    /// Derives the storage key for a (user name, secret) pair.
    fn derive_key(&self, user_name: &str, secret: &str) -> String {
        self.hasher.digest(format!("{user_name}{secret}"))
    }

    /// Issues a new token after checking the password against the
    /// stored account.
    ///
    /// Account lookup and token persistence are two independent store
    /// operations; a crash between them leaves no token behind, which
    /// is the safe failure direction.
    pub async fn issue(
        &self,
        user_name: &str,
        password: &str,
    ) -> Result<IssuedCredential, AuthError> {
        let account: AccountRecord = self
            .store
            .read(Collection::Users, user_name)
            .await
            .map_err(|err| {
                if err.is_not_found() {
                    AuthError::AccountNotFound
                } else {
                    AuthError::Storage(err)
                }
            })?;

        if self.hasher.digest(password) != account.password_hash {
            return Err(AuthError::InvalidCredentials);
        }

        let secret = self.hasher.digest(random_string(SECRET_SEED_LEN));
        let token_id = self.derive_key(user_name, &secret);
        let expires = Timestamp::now()
            .saturating_add(self.ttl)
            .expect("SignedDuration arithmetic is infallible");

        let record = TokenRecord {
            token_id: token_id.clone(),
            expires,
        };
        self.store
            .create(Collection::Tokens, &token_id, &record)
            .await
            .map_err(AuthError::Storage)?;

        tracing::info!(
            target: TRACING_TARGET,
            user_name,
            expires = %expires,
            "token issued"
        );

        Ok(IssuedCredential { secret, expires })
    }

    /// Reads the token record addressed by a (user name, secret) pair.
    pub async fn find(&self, user_name: &str, secret: &str) -> Result<TokenRecord, AuthError> {
        let token_id = self.derive_key(user_name, secret);
        self.store
            .read(Collection::Tokens, &token_id)
            .await
            .map_err(|err| {
                if err.is_not_found() {
                    AuthError::TokenNotFound
                } else {
                    AuthError::Storage(err)
                }
            })
    }

    /// Returns `true` iff an unexpired token exists for the pair.
    ///
    /// A missing token, an expired token, and a storage failure all
    /// read as `false`; callers cannot distinguish which occurred.
    pub async fn verify(&self, secret: &str, user_name: &str) -> bool {
        match self.find(user_name, secret).await {
            Ok(record) => !record.is_expired(),
            Err(AuthError::Storage(err)) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %err,
                    "record store failure during token verification"
                );
                false
            }
            Err(_) => false,
        }
    }

    /// Extends an unexpired token's expiry by the configured lifetime.
    ///
    /// An expired token cannot be renewed, only re-issued via login.
    pub async fn renew(&self, user_name: &str, secret: &str) -> Result<(), AuthError> {
        let token_id = self.derive_key(user_name, secret);
        let mut record: TokenRecord = self
            .store
            .read(Collection::Tokens, &token_id)
            .await
            .map_err(|err| {
                if err.is_not_found() {
                    AuthError::TokenNotFound
                } else {
                    AuthError::Storage(err)
                }
            })?;

        if record.is_expired() {
            return Err(AuthError::TokenExpired);
        }

        record.expires = Timestamp::now()
            .saturating_add(self.ttl)
            .expect("SignedDuration arithmetic is infallible");
        self.store
            .update(Collection::Tokens, &token_id, &record)
            .await
            .map_err(AuthError::Storage)?;

        tracing::info!(
            target: TRACING_TARGET,
            user_name,
            expires = %record.expires,
            "token renewed"
        );
        Ok(())
    }

    /// Deletes the token record addressed by the pair.
    pub async fn revoke(&self, user_name: &str, secret: &str) -> Result<(), AuthError> {
        let token_id = self.derive_key(user_name, secret);
        self.store
            .delete(Collection::Tokens, &token_id)
            .await
            .map_err(|err| {
                if err.is_not_found() {
                    AuthError::TokenNotFound
                } else {
                    AuthError::Storage(err)
                }
            })?;

        tracing::info!(target: TRACING_TARGET, user_name, "token revoked");
        Ok(())
    }
}
