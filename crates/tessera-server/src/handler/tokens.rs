//! Session token handlers.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use tessera_store::model::TokenRecord;

use super::request::{CreateToken, TokenKeys, TokenQuery};
use super::response::{Empty, IssuedToken};
use crate::extract::LenientJson;
use crate::handler::{Error, ErrorKind, Result};
use crate::service::auth::{AuthError, TokenAuthenticator};

/// Tracing target for token operations.
const TRACING_TARGET: &str = "tessera_server::handler::tokens";

/// Logs in: checks the password and issues a fresh token.
///
/// The response carries the secret under the wire name `tokenKey`; the
/// storage key is never sent back.
#[tracing::instrument(skip_all)]
pub async fn create_token(
    State(authenticator): State<TokenAuthenticator>,
    LenientJson(request): LenientJson<CreateToken>,
) -> Result<(StatusCode, Json<IssuedToken>)> {
    let request = request.validate().map_err(super::invalid_fields)?;

    let credential = authenticator
        .issue(&request.user_name, &request.password)
        .await?;

    tracing::info!(
        target: TRACING_TARGET,
        user_name = %request.user_name,
        "login succeeded"
    );

    let issued = IssuedToken {
        token_key: credential.secret,
        expires: credential.expires,
    };
    Ok((StatusCode::OK, Json(issued)))
}

/// Returns the stored token record addressed by `id` and `userName`.
#[tracing::instrument(skip_all)]
pub async fn get_token(
    State(authenticator): State<TokenAuthenticator>,
    Query(query): Query<TokenQuery>,
) -> Result<(StatusCode, Json<TokenRecord>)> {
    let keys = query.validate().map_err(super::invalid_fields)?;

    let record = authenticator
        .find(&keys.user_name, &keys.id)
        .await
        .map_err(token_not_found_as_404)?;

    Ok((StatusCode::OK, Json(record)))
}

/// Extends an unexpired token's lifetime.
///
/// A missing token and an expired one both come back as 400 with
/// distinct messages; an expired token can only be replaced by logging
/// in again.
#[tracing::instrument(skip_all)]
pub async fn renew_token(
    State(authenticator): State<TokenAuthenticator>,
    LenientJson(request): LenientJson<TokenKeys>,
) -> Result<(StatusCode, Json<Empty>)> {
    let keys = request.validate().map_err(super::invalid_fields)?;

    authenticator.renew(&keys.user_name, &keys.id).await?;

    Ok((StatusCode::OK, Json(Empty::default())))
}

/// Logs out: deletes the addressed token record.
#[tracing::instrument(skip_all)]
pub async fn delete_token(
    State(authenticator): State<TokenAuthenticator>,
    LenientJson(request): LenientJson<TokenKeys>,
) -> Result<(StatusCode, Json<Empty>)> {
    let keys = request.validate().map_err(super::invalid_fields)?;

    authenticator
        .revoke(&keys.user_name, &keys.id)
        .await
        .map_err(token_not_found_as_404)?;

    Ok((StatusCode::OK, Json(Empty::default())))
}

/// Maps an absent token to 404 for lookups and revocation.
///
/// Renewal keeps the default 400 mapping instead.
fn token_not_found_as_404(err: AuthError) -> Error {
    match err {
        AuthError::TokenNotFound => ErrorKind::NotFound
            .with_message("Could not find the specified token")
            .with_resource("token"),
        err => Error::from(err),
    }
}
