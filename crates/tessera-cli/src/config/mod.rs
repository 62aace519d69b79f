//! CLI configuration management.
//!
//! This module defines the complete CLI configuration hierarchy:
//!
//! ```text
//! Cli
//! ├── server: ServerConfig   # Host, ports, TLS, shutdown
//! └── service: ServiceConfig # Data directory, hashing secret, token TTL
//! ```
//!
//! All configuration can be provided via CLI arguments or environment
//! variables. Use `--help` to see all available options.
//!
//! # Example
//!
//! ```bash
//! tessera-cli --hashing-secret "..." --http-port 8080
//!
//! # Or via environment variables
//! HASHING_SECRET="..." HTTP_PORT=8080 tessera-cli
//! ```

mod server;

use anyhow::Context;
use clap::Parser;
pub use server::ServerConfig;
use serde::{Deserialize, Serialize};
use tessera_server::service::ServiceConfig;

use crate::TRACING_TARGET_CONFIG;

/// Complete CLI configuration.
///
/// Combines all configuration groups for the tessera server:
/// - [`ServerConfig`]: Network binding, TLS, and shutdown
/// - [`ServiceConfig`]: Record storage and token issuance
#[derive(Debug, Clone, Parser, Serialize, Deserialize)]
#[command(name = "tessera")]
#[command(about = "Tessera accounts and session tokens API server")]
#[command(version)]
pub struct Cli {
    /// Server network and lifecycle configuration.
    #[clap(flatten)]
    pub server: ServerConfig,

    /// Storage and token issuance configuration.
    #[clap(flatten)]
    pub service: ServiceConfig,
}

impl Cli {
    /// Validates all configuration values.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.server
            .validate()
            .context("invalid server configuration")?;
        self.service
            .validate()
            .context("invalid service configuration")?;
        Ok(())
    }

    /// Logs configuration at startup (no sensitive information).
    pub fn log(&self) {
        self.server.log();

        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            data_dir = %self.service.data_dir.display(),
            token_ttl_secs = self.service.token_ttl_secs,
            "Storage configuration"
        );
    }
}
