//! All `axum::`[`Router`]s with related `axum::`[`Handler`]s.
//!
//! [`Router`]: axum::routing::Router
//! [`Handler`]: axum::handler::Handler

mod accounts;
mod error;
mod request;
mod response;
mod tokens;

use axum::Router;
use axum::response::{IntoResponse, Response};
use axum::routing;

pub use crate::handler::error::{Error, ErrorKind, Result};
use crate::handler::request::Violations;
use crate::middleware::access_log;
use crate::service::ServiceState;

/// Builds the full application router.
///
/// Each resource mounts one [`MethodRouter`] so an unsupported method on
/// a known path answers 405 rather than 404; everything else falls
/// through to the JSON 404.
///
/// [`MethodRouter`]: axum::routing::MethodRouter
pub fn routes(state: ServiceState) -> Router {
    let users = routing::post(accounts::create_account)
        .get(accounts::get_account)
        .put(accounts::update_account)
        .delete(accounts::delete_account)
        .fallback(method_not_allowed);

    let tokens = routing::post(tokens::create_token)
        .get(tokens::get_token)
        .put(tokens::renew_token)
        .delete(tokens::delete_token)
        .fallback(method_not_allowed);

    Router::new()
        .route("/users", users)
        .route("/tokens", tokens)
        .fallback(not_found)
        .layer(axum::middleware::from_fn(access_log))
        .with_state(state)
}

#[inline]
async fn not_found() -> Response {
    ErrorKind::NotFound.into_response()
}

#[inline]
async fn method_not_allowed() -> Response {
    ErrorKind::MethodNotAllowed.into_response()
}

/// Turns field violations into the 400 the validation policy mandates.
fn invalid_fields(violations: Violations) -> Error {
    ErrorKind::BadRequest.with_message(format!(
        "Missing or invalid field(s): {}",
        violations.join(", ")
    ))
}

#[cfg(test)]
pub(crate) mod test {
    use axum_test::TestServer;
    use serde_json::{Value, json};
    use tempfile::TempDir;

    use crate::service::{ServiceConfig, ServiceState};

    /// Keyed-hash secret shared by every test server.
    pub(crate) const HASHING_SECRET: &str = "test-secret";

    /// Spawns a router over a throwaway data directory.
    ///
    /// The directory handle must stay alive for the server's lifetime.
    pub(crate) async fn test_server() -> (TestServer, TempDir) {
        let dir = TempDir::new().expect("temp dir");
        let config = ServiceConfig {
            data_dir: dir.path().into(),
            hashing_secret: HASHING_SECRET.to_owned(),
            token_ttl_secs: 3600,
        };

        let state = ServiceState::from_config(&config).await.expect("state");
        let server = TestServer::new(super::routes(state)).expect("test server");
        (server, dir)
    }

    /// A complete signup payload for the given user.
    pub(crate) fn signup_payload(user_name: &str) -> Value {
        json!({
            "userName": user_name,
            "emailAddress": format!("{user_name}@example.com"),
            "firstName": "Alice",
            "lastName": "Smith",
            "streetAddress": "1 Main St",
            "password": "hunter2!",
            "tosAgreement": true,
        })
    }

    /// Creates an account for the given user.
    pub(crate) async fn signup(server: &TestServer, user_name: &str) {
        let response = server.post("/users").json(&signup_payload(user_name)).await;
        response.assert_status_ok();
    }

    /// Logs the user in and returns the issued secret.
    pub(crate) async fn login(server: &TestServer, user_name: &str) -> String {
        let response = server
            .post("/tokens")
            .json(&json!({ "userName": user_name, "password": "hunter2!" }))
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        body["tokenKey"].as_str().expect("tokenKey").to_owned()
    }
}
