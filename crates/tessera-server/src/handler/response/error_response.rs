//! Wire representation of handler errors.

use std::borrow::Cow;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// HTTP error response body.
///
/// Holds the error name, a user-facing message safe for client display,
/// the optional resource the error relates to, and the status code
/// (which travels in the response head, not the body).
#[must_use = "error responses do nothing unless serialized"]
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// The error name/type identifier
    pub name: Cow<'static, str>,
    /// User-facing error message
    pub message: Cow<'static, str>,
    /// The resource that the error relates to (optional, set by handler)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<Cow<'static, str>>,
    /// HTTP status code (not serialized in JSON)
    #[serde(skip)]
    pub status: StatusCode,
}

impl ErrorResponse {
    // 4xx Client Errors
    pub const BAD_REQUEST: Self = Self::new(
        "bad_request",
        "Missing required field(s) or field(s) are invalid",
        StatusCode::BAD_REQUEST,
    );
    // Duplicate creation is reported as a plain 400 on the wire; the
    // distinct name survives in the body.
    pub const CONFLICT: Self = Self::new(
        "conflict",
        "A resource with that identifier already exists",
        StatusCode::BAD_REQUEST,
    );
    pub const FORBIDDEN: Self = Self::new(
        "forbidden",
        "Missing required token in header, or token is invalid",
        StatusCode::FORBIDDEN,
    );
    // 5xx Server Errors
    pub const INTERNAL_SERVER_ERROR: Self = Self::new(
        "internal_server_error",
        "An internal server error occurred. Please try again later",
        StatusCode::INTERNAL_SERVER_ERROR,
    );
    pub const METHOD_NOT_ALLOWED: Self = Self::new(
        "method_not_allowed",
        "The requested method is not supported for this resource",
        StatusCode::METHOD_NOT_ALLOWED,
    );
    pub const NOT_FOUND: Self = Self::new(
        "not_found",
        "The requested resource was not found",
        StatusCode::NOT_FOUND,
    );

    /// Creates a new error response.
    #[inline]
    pub const fn new(name: &'static str, message: &'static str, status: StatusCode) -> Self {
        Self {
            name: Cow::Borrowed(name),
            message: Cow::Borrowed(message),
            resource: None,
            status,
        }
    }

    /// Replaces the default message with a custom one.
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Sets the resource the error relates to.
    pub fn with_resource(mut self, resource: impl Into<Cow<'static, str>>) -> Self {
        self.resource = Some(resource.into());
        self
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status = self.status;
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_is_a_json_object() {
        let value = serde_json::to_value(ErrorResponse::NOT_FOUND).expect("serialize");
        assert!(value.is_object());
        assert_eq!(value["name"], "not_found");
        assert!(value.get("status").is_none());
    }

    #[test]
    fn conflict_status_is_bad_request() {
        assert_eq!(ErrorResponse::CONFLICT.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn resource_is_omitted_when_unset() {
        let value = serde_json::to_value(ErrorResponse::BAD_REQUEST).expect("serialize");
        assert!(value.get("resource").is_none());

        let with_resource = ErrorResponse::BAD_REQUEST.with_resource("token");
        let value = serde_json::to_value(with_resource).expect("serialize");
        assert_eq!(value["resource"], "token");
    }
}
