//! Bearer token header extraction.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

/// Header carrying the session token secret.
const TOKEN_HEADER: &str = "token";

/// The optional `token` header, trimmed.
///
/// Extraction never rejects: an absent, unreadable, or empty header
/// yields `None`, and the handler decides whether that is an error.
#[must_use]
#[derive(Debug, Clone, Default)]
pub struct TokenHeader(pub Option<String>);

impl TokenHeader {
    /// Returns the token value, if one was supplied.
    #[inline]
    pub fn into_inner(self) -> Option<String> {
        self.0
    }
}

impl<S> FromRequestParts<S> for TokenHeader
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(TOKEN_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty());

        Ok(Self(token))
    }
}
