//! Per-request access logging.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Tracing target for request logging.
const TRACING_TARGET: &str = "tessera_server::middleware::access_log";

/// Logs every handled request with its method, path and outcome.
///
/// Successful responses log at `info`, everything else at `warn`.
pub async fn access_log(request: Request, next: Next) -> Response {
    let start_time = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed = start_time.elapsed();
    if status.is_success() {
        tracing::info!(
            target: TRACING_TARGET,
            method = %method,
            path = %path,
            status = status.as_u16(),
            elapsed_ms = elapsed.as_millis() as u64,
            "request handled"
        );
    } else {
        tracing::warn!(
            target: TRACING_TARGET,
            method = %method,
            path = %path,
            status = status.as_u16(),
            elapsed_ms = elapsed.as_millis() as u64,
            "request failed"
        );
    }

    response
}
