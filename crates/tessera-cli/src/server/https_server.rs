//! TLS listener built on `axum-server`.

use std::io;
use std::path::Path;

use axum_server::tls_rustls::RustlsConfig;

use crate::config::ServerConfig;
use crate::server::lifecycle::serve_with_shutdown;
use crate::server::{App, Result, ServerError, TRACING_TARGET_STARTUP, shutdown_signal};

/// Starts the HTTPS listener with graceful shutdown.
///
/// Callers must run [`validate_tls_files`] first; a missing path here is
/// a programming error and surfaces as a TLS configuration failure.
pub(crate) async fn serve_https(app: App, config: &ServerConfig) -> Result<()> {
    let addr = config.https_addr();
    let shutdown_timeout = config.shutdown_timeout();

    let (cert_path, key_path) = config
        .tls_paths()
        .ok_or_else(|| ServerError::TlsCertificate("TLS paths are not configured".to_owned()))?;
    let cert_path = cert_path.to_owned();
    let key_path = key_path.to_owned();

    serve_with_shutdown(config, addr, move || async move {
        let tls_config = RustlsConfig::from_pem_file(&cert_path, &key_path)
            .await
            .map_err(|err| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("Failed to load TLS certificates: {err}"),
                )
            })?;

        tracing::info!(
            target: TRACING_TARGET_STARTUP,
            cert_path = %cert_path.display(),
            key_path = %key_path.display(),
            "TLS certificates loaded successfully"
        );

        let handle = axum_server::Handle::new();
        let shutdown_handle = handle.clone();

        tokio::spawn(async move {
            shutdown_signal(shutdown_timeout).await;
            shutdown_handle.graceful_shutdown(Some(shutdown_timeout));
        });

        axum_server::bind_rustls(addr, tls_config)
            .handle(handle)
            .serve(app)
            .await
    })
    .await
}

/// Checks that both TLS files exist, are regular files, and are non-empty.
pub(crate) fn validate_tls_files(cert_path: &Path, key_path: &Path) -> Result<()> {
    let validate_file = |path: &Path, file_type: &str| -> Result<()> {
        if !path.exists() {
            return Err(ServerError::TlsCertificate(format!(
                "{} file does not exist: {}",
                file_type,
                path.display()
            )));
        }

        if !path.is_file() {
            return Err(ServerError::TlsCertificate(format!(
                "{} path is not a file: {}",
                file_type,
                path.display()
            )));
        }

        let metadata = std::fs::metadata(path).map_err(|err| {
            ServerError::TlsCertificate(format!(
                "Cannot read {} file {}: {}",
                file_type,
                path.display(),
                err
            ))
        })?;

        if metadata.len() == 0 {
            return Err(ServerError::TlsCertificate(format!(
                "{} file is empty: {}",
                file_type,
                path.display()
            )));
        }

        Ok(())
    };

    validate_file(cert_path, "Certificate")?;
    validate_file(key_path, "Private key")?;

    tracing::debug!(
        target: TRACING_TARGET_STARTUP,
        cert_path = %cert_path.display(),
        key_path = %key_path.display(),
        "TLS files validated successfully"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_tls_files_rejects_nonexistent_files() {
        let cert_path = Path::new("nonexistent_cert.pem");
        let key_path = Path::new("nonexistent_key.pem");

        let result = validate_tls_files(cert_path, key_path);
        assert!(result.is_err());

        if let Err(ServerError::TlsCertificate(msg)) = result {
            assert!(msg.contains("Certificate file does not exist"));
        } else {
            panic!("Expected TlsCertificate error");
        }
    }
}
