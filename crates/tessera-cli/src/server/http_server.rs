//! Plaintext HTTP listener.

use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::server::lifecycle::serve_with_shutdown;
use crate::server::{App, Result, ServerError, TRACING_TARGET_STARTUP, shutdown_signal};

/// Starts the HTTP listener with graceful shutdown.
pub(crate) async fn serve_http(app: App, config: &ServerConfig) -> Result<()> {
    let addr = config.http_addr();

    let listener = TcpListener::bind(addr).await.map_err(|err| {
        tracing::error!(
            target: TRACING_TARGET_STARTUP,
            addr = %addr,
            error = %err,
            "Failed to bind to address"
        );
        ServerError::bind(addr, err)
    })?;

    let shutdown = shutdown_signal(config.shutdown_timeout());
    serve_with_shutdown(config, addr, || async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
    })
    .await
}
