//! HTTP(S) server configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Result as AnyhowResult, anyhow};
use clap::Args;
use serde::{Deserialize, Serialize};

use crate::TRACING_TARGET_CONFIG;

/// HTTP(S) server configuration.
///
/// The plaintext listener always runs on `http_port`; when both TLS
/// paths are configured, a second listener serves the same router over
/// TLS on `https_port`.
///
/// # Environment Variables
///
/// - `HOST` - Server host address (default: 127.0.0.1)
/// - `HTTP_PORT` - Plaintext port (default: 3000, valid range: 1024-65535)
/// - `HTTPS_PORT` - TLS port (default: 3001, valid range: 1024-65535)
/// - `TLS_CERT_PATH` / `TLS_KEY_PATH` - PEM files, provided together
/// - `SHUTDOWN_TIMEOUT` - Graceful shutdown timeout in seconds (default: 30, max: 300)
#[derive(Debug, Clone, Args, Serialize, Deserialize)]
#[must_use = "config does nothing unless you use it"]
pub struct ServerConfig {
    /// Host address to bind the listeners to.
    ///
    /// Use "127.0.0.1" for localhost only, "0.0.0.0" for all interfaces.
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    #[serde(default = "default_host")]
    pub host: IpAddr,

    /// TCP port for the plaintext listener.
    ///
    /// Must be in the range 1024-65535. Ports below 1024 require root
    /// privileges.
    #[arg(short = 'p', long, env = "HTTP_PORT", default_value_t = 3000)]
    pub http_port: u16,

    /// TCP port for the TLS listener.
    ///
    /// Only used when both TLS paths are configured.
    #[arg(long, env = "HTTPS_PORT", default_value_t = 3001)]
    pub https_port: u16,

    /// Path to the TLS certificate file (PEM format).
    #[arg(long, env = "TLS_CERT_PATH")]
    pub tls_cert_path: Option<PathBuf>,

    /// Path to the TLS private key file (PEM format).
    #[arg(long, env = "TLS_KEY_PATH")]
    pub tls_key_path: Option<PathBuf>,

    /// Maximum time in seconds to wait for graceful shutdown.
    ///
    /// During shutdown, the listeners stop accepting new connections and
    /// wait up to this duration for in-flight requests to complete.
    /// Valid range: 1-300 seconds.
    #[arg(long, env = "SHUTDOWN_TIMEOUT", default_value_t = 30)]
    pub shutdown_timeout: u64,
}

/// Default host address for development.
fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::LOCALHOST)
}

impl ServerConfig {
    /// Validates all configuration values and returns errors for invalid settings.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration value is outside its valid range:
    /// - Ports must be 1024-65535 and distinct
    /// - Shutdown timeout must be 1-300 seconds
    /// - TLS paths must be provided together
    pub fn validate(&self) -> AnyhowResult<()> {
        for port in [self.http_port, self.https_port] {
            if port < 1024 {
                return Err(anyhow!(
                    "Port {port} is below 1024. Use ports 1024-65535 to avoid requiring root privileges."
                ));
            }
        }

        if self.http_port == self.https_port {
            return Err(anyhow!(
                "HTTP and HTTPS ports must differ, both are {}",
                self.http_port
            ));
        }

        if self.shutdown_timeout == 0 || self.shutdown_timeout > 300 {
            return Err(anyhow!(
                "Shutdown timeout {} seconds is invalid. Must be between 1 and 300 seconds.",
                self.shutdown_timeout
            ));
        }

        match (&self.tls_cert_path, &self.tls_key_path) {
            (Some(_), None) | (None, Some(_)) => {
                return Err(anyhow!(
                    "Both TLS certificate and key paths must be provided together"
                ));
            }
            _ => {}
        }

        Ok(())
    }

    /// Returns the socket address for the plaintext listener.
    #[must_use]
    pub const fn http_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.http_port)
    }

    /// Returns the socket address for the TLS listener.
    #[must_use]
    pub const fn https_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.https_port)
    }

    /// Returns the graceful shutdown timeout as a `Duration`.
    #[must_use]
    pub const fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout)
    }

    /// Returns the TLS paths when both are configured.
    #[must_use]
    pub fn tls_paths(&self) -> Option<(&Path, &Path)> {
        match (&self.tls_cert_path, &self.tls_key_path) {
            (Some(cert), Some(key)) => Some((cert, key)),
            _ => None,
        }
    }

    /// Returns whether TLS is configured.
    #[must_use]
    pub const fn is_tls_enabled(&self) -> bool {
        self.tls_cert_path.is_some() && self.tls_key_path.is_some()
    }

    /// Returns whether the server is configured to bind to all interfaces.
    ///
    /// This is true when the host is set to "0.0.0.0" (IPv4) or "::" (IPv6).
    #[must_use]
    pub const fn binds_to_all_interfaces(&self) -> bool {
        match self.host {
            IpAddr::V4(addr) => addr.is_unspecified(),
            IpAddr::V6(addr) => addr.is_unspecified(),
        }
    }

    /// Logs server configuration details at startup.
    pub fn log(&self) {
        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            host = %self.host,
            http_port = self.http_port,
            https_port = self.https_port,
            tls_enabled = self.is_tls_enabled(),
            "Server configured successfully"
        );
    }
}

impl Default for ServerConfig {
    /// Creates a development-friendly configuration with safe defaults.
    fn default() -> Self {
        Self {
            host: default_host(),
            http_port: 3000,
            https_port: 3001,
            tls_cert_path: None,
            tls_key_path: None,
            shutdown_timeout: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.binds_to_all_interfaces());
        assert!(!config.is_tls_enabled());
    }

    #[test]
    fn reject_privileged_ports() {
        let config = ServerConfig {
            http_port: 80,
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn reject_colliding_ports() {
        let config = ServerConfig {
            http_port: 3000,
            https_port: 3000,
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn reject_invalid_shutdown_timeout() {
        for timeout in [0, 301] {
            let config = ServerConfig {
                shutdown_timeout: timeout,
                ..ServerConfig::default()
            };
            assert!(config.validate().is_err());
        }
    }

    #[test]
    fn reject_partial_tls_paths() {
        let config = ServerConfig {
            tls_cert_path: Some("./cert.pem".into()),
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ServerConfig {
            tls_cert_path: Some("./cert.pem".into()),
            tls_key_path: Some("./key.pem".into()),
            ..ServerConfig::default()
        };
        assert!(config.validate().is_ok());
        assert!(config.tls_paths().is_some());
    }

    #[test]
    fn listener_addrs_use_configured_ports() {
        let config = ServerConfig::default();
        assert_eq!(config.http_addr().port(), 3000);
        assert_eq!(config.https_addr().port(), 3001);
        assert_eq!(config.http_addr().ip(), IpAddr::V4(Ipv4Addr::LOCALHOST));
    }
}
