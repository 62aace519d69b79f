use std::path::PathBuf;

use anyhow::{Result as AnyhowResult, anyhow};
use jiff::SignedDuration;
use serde::{Deserialize, Serialize};
use tessera_core::crypto::Hasher;
use tessera_store::FileStore;

use crate::service::Result;

/// Default session token lifetime in seconds.
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 3600;

/// App [`state`] configuration.
///
/// [`state`]: crate::service::ServiceState
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(clap::Args))]
#[must_use = "config does nothing unless you use it"]
pub struct ServiceConfig {
    /// Directory holding the record collections.
    #[cfg_attr(
        feature = "config",
        arg(short = 'd', long, env = "DATA_DIR", default_value = ".data")
    )]
    pub data_dir: PathBuf,

    /// Secret key for the keyed hash used for passwords and token keys.
    #[cfg_attr(feature = "config", arg(long, env = "HASHING_SECRET"))]
    pub hashing_secret: String,

    /// Session token lifetime in seconds.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "TOKEN_TTL", default_value_t = DEFAULT_TOKEN_TTL_SECS)
    )]
    pub token_ttl_secs: u64,
}

impl ServiceConfig {
    /// Validates all configuration values and returns errors for invalid settings.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration value is invalid:
    /// - Data directory path must not be empty
    /// - Hashing secret must not be empty
    /// - Token lifetime must be at least one second
    pub fn validate(&self) -> AnyhowResult<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(anyhow!("Data directory path cannot be empty"));
        }

        if self.hashing_secret.is_empty() {
            return Err(anyhow!("Hashing secret cannot be empty"));
        }

        if self.token_ttl_secs == 0 {
            return Err(anyhow!("Token lifetime must be at least one second"));
        }

        Ok(())
    }

    /// Returns the configured token lifetime.
    #[must_use]
    pub fn token_ttl(&self) -> SignedDuration {
        SignedDuration::from_secs(self.token_ttl_secs as i64)
    }

    /// Opens the record store, creating collection directories as needed.
    pub async fn open_store(&self) -> Result<FileStore> {
        Ok(FileStore::open(&self.data_dir).await?)
    }

    /// Creates the keyed hash from the configured secret.
    pub fn create_hasher(&self) -> Result<Hasher> {
        Ok(Hasher::new(&self.hashing_secret)?)
    }
}

#[cfg(debug_assertions)]
impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            data_dir: ".data".into(),
            hashing_secret: "thisIsASecret".to_owned(),
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_passes_validation() {
        let config = ServiceConfig::default();
        config.validate().expect("valid config");
        assert_eq!(config.token_ttl(), SignedDuration::from_secs(3600));
    }

    #[test]
    fn empty_secret_is_rejected() {
        let config = ServiceConfig {
            hashing_secret: String::new(),
            ..ServiceConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_ttl_is_rejected() {
        let config = ServiceConfig {
            token_ttl_secs: 0,
            ..ServiceConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
