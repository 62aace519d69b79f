//! JSON body extraction that never fails the request.

use std::convert::Infallible;

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use derive_more::{Deref, From};
use serde::de::DeserializeOwned;

/// Tracing target for body extraction.
const TRACING_TARGET: &str = "tessera_server::extract::lenient_json";

/// Maximum allowed JSON payload size in bytes (1MB).
const MAX_JSON_PAYLOAD_SIZE: usize = 1024 * 1024;

/// JSON extractor that substitutes the default value on parse failure.
///
/// A request with a missing, truncated, or malformed JSON body reads as
/// "no payload": every field of the target type falls back to its
/// default, and required-field validation happens afterwards in the
/// handler. Malformed JSON therefore never fails a request by itself.
#[must_use]
#[derive(Debug, Clone, Copy, Default, Deref, From)]
pub struct LenientJson<T>(pub T);

impl<T> LenientJson<T> {
    /// Returns the inner value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T, S> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned + Default + 'static,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
        let bytes = match axum::body::to_bytes(req.into_body(), MAX_JSON_PAYLOAD_SIZE).await {
            Ok(bytes) => bytes,
            Err(error) => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    error = %error,
                    "failed to buffer request body, treating as empty payload"
                );
                Bytes::new()
            }
        };

        if bytes.is_empty() {
            return Ok(Self(T::default()));
        }

        match serde_json::from_slice(&bytes) {
            Ok(payload) => Ok(Self(payload)),
            Err(error) => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    error = %error,
                    "malformed request body, treating as empty payload"
                );
                Ok(Self(T::default()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::Request as HttpRequest;
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Default, Deserialize)]
    struct Payload {
        name: Option<String>,
    }

    async fn extract(body: &'static str) -> Payload {
        let request = HttpRequest::builder()
            .body(Body::from(body))
            .expect("request");
        let LenientJson(payload) = LenientJson::<Payload>::from_request(request, &())
            .await
            .expect("infallible");
        payload
    }

    #[tokio::test]
    async fn parses_well_formed_body() {
        let payload = extract(r#"{"name":"alice"}"#).await;
        assert_eq!(payload.name.as_deref(), Some("alice"));
    }

    #[tokio::test]
    async fn malformed_body_reads_as_empty_payload() {
        let payload = extract("{not json").await;
        assert!(payload.name.is_none());
    }

    #[tokio::test]
    async fn empty_body_reads_as_empty_payload() {
        let payload = extract("").await;
        assert!(payload.name.is_none());
    }
}
