//! HTTP/HTTPS server startup with lifecycle management.
//!
//! The plaintext listener always runs; when TLS certificates are
//! configured, a second listener serves the same router over TLS. Both
//! listeners share the graceful-shutdown signal.

/// Tracing target for server startup events.
pub const TRACING_TARGET_STARTUP: &str = "tessera_cli::server::startup";

/// Tracing target for server shutdown events.
pub const TRACING_TARGET_SHUTDOWN: &str = "tessera_cli::server::shutdown";

mod error;
mod http_server;
mod https_server;
mod lifecycle;
mod shutdown;

use axum::extract::Request;
use axum::routing::IntoMakeService;
use axum::{Router, ServiceExt};
pub use error::{Result, ServerError};
use http_server::serve_http;
use https_server::{serve_https, validate_tls_files};
use shutdown::shutdown_signal;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::config::ServerConfig;

/// The make-service both listeners hand out per connection.
type App = IntoMakeService<NormalizePath<Router>>;

/// Wraps the router so trailing slashes are stripped before routing.
///
/// The layer must sit outside the [`Router`]: a `Router::layer` call
/// would run after the route match has already happened.
fn into_app(router: Router) -> App {
    let app = NormalizePathLayer::trim_trailing_slash().layer(router);
    ServiceExt::<Request>::into_make_service(app)
}

/// Starts the configured listeners and blocks until shutdown.
///
/// # Errors
///
/// Returns an error if:
/// - Server configuration is invalid
/// - TLS certificates cannot be loaded
/// - A listener cannot bind to its address/port
/// - A listener encounters a fatal error during operation
pub async fn serve(router: Router, config: ServerConfig) -> Result<()> {
    config
        .validate()
        .map_err(|err| ServerError::invalid_config(&err))?;

    let app = into_app(router);

    if config.is_tls_enabled() {
        if let Some((cert_path, key_path)) = config.tls_paths() {
            validate_tls_files(cert_path, key_path)?;
        }

        tokio::try_join!(
            serve_http(app.clone(), &config),
            serve_https(app, &config),
        )?;
    } else {
        serve_http(app, &config).await?;
    }

    Ok(())
}
