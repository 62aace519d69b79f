//! Account management handlers.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use tessera_store::model::AccountRecord;
use tessera_store::{Collection, FileStore};
use uuid::Uuid;

use super::request::{AccountQuery, CreateAccount, UpdateAccount};
use super::response::{Account, Empty};
use crate::extract::{LenientJson, TokenHeader};
use crate::handler::{Error, ErrorKind, Result};
use crate::service::auth::{PasswordHasher, TokenAuthenticator};

/// Tracing target for account operations.
const TRACING_TARGET: &str = "tessera_server::handler::accounts";

/// Creates a new account.
///
/// The user name doubles as the storage key, so uniqueness falls out of
/// the create-exclusive write.
#[tracing::instrument(skip_all)]
pub async fn create_account(
    State(store): State<FileStore>,
    State(password_hasher): State<PasswordHasher>,
    LenientJson(request): LenientJson<CreateAccount>,
) -> Result<(StatusCode, Json<Empty>)> {
    let request = request.validate().map_err(super::invalid_fields)?;

    let record = AccountRecord {
        account_id: Uuid::new_v4(),
        user_name: request.user_name.clone(),
        email_address: request.email_address,
        first_name: request.first_name,
        last_name: request.last_name,
        street_address: request.street_address,
        password_hash: password_hasher.hash_password(&request.password),
        tos_agreement: true,
    };

    store
        .create(Collection::Users, &request.user_name, &record)
        .await
        .map_err(|err| {
            if err.is_already_exists() {
                ErrorKind::Conflict
                    .with_message("A user with that username already exists")
                    .with_resource("account")
            } else {
                Error::from(err)
            }
        })?;

    tracing::info!(
        target: TRACING_TARGET,
        user_name = %request.user_name,
        "account created"
    );

    Ok((StatusCode::OK, Json(Empty::default())))
}

/// Returns the account selected by `userName`, minus internal fields.
#[tracing::instrument(skip_all)]
pub async fn get_account(
    State(store): State<FileStore>,
    State(authenticator): State<TokenAuthenticator>,
    TokenHeader(token): TokenHeader,
    Query(query): Query<AccountQuery>,
) -> Result<(StatusCode, Json<Account>)> {
    let Some(user_name) = query.user_name() else {
        return Err(ErrorKind::BadRequest.with_resource("userName"));
    };

    authorize(&authenticator, token, &user_name).await?;

    let record: AccountRecord = store
        .read(Collection::Users, &user_name)
        .await
        .map_err(|err| {
            if err.is_not_found() {
                ErrorKind::NotFound
                    .with_message("Could not find the specified user")
                    .with_resource("account")
            } else {
                Error::from(err)
            }
        })?;

    Ok((StatusCode::OK, Json(Account::from_record(record))))
}

/// Applies a partial update to an existing account.
///
/// An unknown account reads back as 400 here, not 404; the lookup also
/// deliberately precedes token verification. Both quirks are part of
/// the public contract.
#[tracing::instrument(skip_all)]
pub async fn update_account(
    State(store): State<FileStore>,
    State(authenticator): State<TokenAuthenticator>,
    State(password_hasher): State<PasswordHasher>,
    TokenHeader(token): TokenHeader,
    LenientJson(request): LenientJson<UpdateAccount>,
) -> Result<(StatusCode, Json<Empty>)> {
    let request = request.validate().map_err(super::invalid_fields)?;

    let mut record: AccountRecord = store
        .read(Collection::Users, &request.user_name)
        .await
        .map_err(|err| {
            if err.is_not_found() {
                ErrorKind::BadRequest
                    .with_message("Could not find the specified user")
                    .with_resource("account")
            } else {
                Error::from(err)
            }
        })?;

    authorize(&authenticator, token, &request.user_name).await?;

    if let Some(email_address) = request.email_address {
        record.email_address = email_address;
    }
    if let Some(first_name) = request.first_name {
        record.first_name = first_name;
    }
    if let Some(last_name) = request.last_name {
        record.last_name = last_name;
    }
    if let Some(street_address) = request.street_address {
        record.street_address = street_address;
    }
    if let Some(password) = request.password {
        record.password_hash = password_hasher.hash_password(&password);
    }

    store
        .update(Collection::Users, &request.user_name, &record)
        .await?;

    tracing::info!(
        target: TRACING_TARGET,
        user_name = %request.user_name,
        "account updated"
    );

    Ok((StatusCode::OK, Json(Empty::default())))
}

/// Deletes the account selected by `userName`.
///
/// Outstanding tokens are left in place; they expire on their own.
#[tracing::instrument(skip_all)]
pub async fn delete_account(
    State(store): State<FileStore>,
    State(authenticator): State<TokenAuthenticator>,
    TokenHeader(token): TokenHeader,
    Query(query): Query<AccountQuery>,
) -> Result<(StatusCode, Json<Empty>)> {
    let Some(user_name) = query.user_name() else {
        return Err(ErrorKind::BadRequest.with_resource("userName"));
    };

    authorize(&authenticator, token, &user_name).await?;

    store
        .delete(Collection::Users, &user_name)
        .await
        .map_err(|err| {
            if err.is_not_found() {
                ErrorKind::NotFound
                    .with_message("Could not find the specified user")
                    .with_resource("account")
            } else {
                Error::from(err)
            }
        })?;

    tracing::info!(target: TRACING_TARGET, user_name = %user_name, "account deleted");

    Ok((StatusCode::OK, Json(Empty::default())))
}

/// Requires an unexpired token matching the addressed user.
async fn authorize(
    authenticator: &TokenAuthenticator,
    token: Option<String>,
    user_name: &str,
) -> Result<()> {
    let Some(token) = token else {
        return Err(ErrorKind::Forbidden.into_error());
    };

    if authenticator.verify(&token, user_name).await {
        Ok(())
    } else {
        Err(ErrorKind::Forbidden.into_error())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use crate::handler::test::{login, signup, signup_payload, test_server};

    #[tokio::test]
    async fn signup_then_sanitized_read() {
        let (server, _dir) = test_server().await;
        signup(&server, "alice").await;
        let token = login(&server, "alice").await;

        let response = server
            .get("/users")
            .add_query_param("userName", "alice")
            .add_header("token", &token)
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["userName"], "alice");
        assert_eq!(body["tosAgreement"], true);
        assert!(body.get("passwordHash").is_none());
        assert!(body.get("accountId").is_none());
    }

    #[tokio::test]
    async fn duplicate_signup_is_rejected() {
        let (server, _dir) = test_server().await;
        signup(&server, "alice").await;

        let response = server.post("/users").json(&signup_payload("alice")).await;
        response.assert_status_bad_request();

        let body: Value = response.json();
        assert_eq!(body["name"], "conflict");
    }

    #[tokio::test]
    async fn signup_requires_tos_agreement() {
        let (server, _dir) = test_server().await;

        let mut payload = signup_payload("alice");
        payload["tosAgreement"] = json!(false);
        let response = server.post("/users").json(&payload).await;
        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn read_requires_matching_token() {
        let (server, _dir) = test_server().await;
        signup(&server, "alice").await;
        signup(&server, "bob").await;
        let token = login(&server, "alice").await;

        // No token at all.
        let response = server
            .get("/users")
            .add_query_param("userName", "alice")
            .await;
        response.assert_status_forbidden();

        // Someone else's token.
        let response = server
            .get("/users")
            .add_query_param("userName", "bob")
            .add_header("token", &token)
            .await;
        response.assert_status_forbidden();
    }

    #[tokio::test]
    async fn read_requires_user_name_query() {
        let (server, _dir) = test_server().await;
        signup(&server, "alice").await;
        let token = login(&server, "alice").await;

        let response = server.get("/users").add_header("token", &token).await;
        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn update_applies_only_supplied_fields() {
        let (server, _dir) = test_server().await;
        signup(&server, "alice").await;
        let token = login(&server, "alice").await;

        let response = server
            .put("/users")
            .add_header("token", &token)
            .json(&json!({ "userName": "alice", "firstName": "Alicia" }))
            .await;
        response.assert_status_ok();

        let response = server
            .get("/users")
            .add_query_param("userName", "alice")
            .add_header("token", &token)
            .await;
        let body: Value = response.json();
        assert_eq!(body["firstName"], "Alicia");
        assert_eq!(body["lastName"], "Smith");
    }

    #[tokio::test]
    async fn update_of_unknown_account_is_bad_request() {
        let (server, _dir) = test_server().await;

        let response = server
            .put("/users")
            .json(&json!({ "userName": "nobody", "firstName": "No" }))
            .await;
        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn update_requires_a_mutable_field() {
        let (server, _dir) = test_server().await;
        signup(&server, "alice").await;
        let token = login(&server, "alice").await;

        let response = server
            .put("/users")
            .add_header("token", &token)
            .json(&json!({ "userName": "alice" }))
            .await;
        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn delete_leaves_tokens_in_place() {
        let (server, _dir) = test_server().await;
        signup(&server, "alice").await;
        let token = login(&server, "alice").await;

        let response = server
            .delete("/users")
            .add_query_param("userName", "alice")
            .add_header("token", &token)
            .await;
        response.assert_status_ok();

        // The token still verifies, so a second delete reaches storage
        // and reports the record as gone.
        let response = server
            .delete("/users")
            .add_query_param("userName", "alice")
            .add_header("token", &token)
            .await;
        response.assert_status_not_found();

        let response = server
            .get("/users")
            .add_query_param("userName", "alice")
            .add_header("token", &token)
            .await;
        response.assert_status_not_found();
    }
}
