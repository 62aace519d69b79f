//! Application state and dependency injection.

use tessera_store::FileStore;

use crate::service::auth::{PasswordHasher, TokenAuthenticator};
use crate::service::{Result, ServiceConfig};

/// Application state.
///
/// Used for the [`State`] extraction (dependency injection).
///
/// [`State`]: axum::extract::State
#[must_use = "state does nothing unless you use it"]
#[derive(Clone)]
pub struct ServiceState {
    store: FileStore,

    password_hasher: PasswordHasher,
    authenticator: TokenAuthenticator,
}

impl ServiceState {
    /// Initializes application state from configuration.
    ///
    /// Opens the record store and derives the keyed hashes.
    pub async fn from_config(config: &ServiceConfig) -> Result<Self> {
        let store = config.open_store().await?;
        let hasher = config.create_hasher()?;

        let service_state = Self {
            store: store.clone(),
            password_hasher: PasswordHasher::new(hasher.clone()),
            authenticator: TokenAuthenticator::new(store, hasher, config.token_ttl()),
        };

        Ok(service_state)
    }
}

macro_rules! impl_di {
    ($($f:ident: $t:ty),+) => {$(
        impl axum::extract::FromRef<ServiceState> for $t {
            fn from_ref(state: &ServiceState) -> Self {
                state.$f.clone()
            }
        }
    )+};
}

impl_di!(store: FileStore);
impl_di!(password_hasher: PasswordHasher);
impl_di!(authenticator: TokenAuthenticator);
