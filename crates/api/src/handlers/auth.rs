//! Handlers for login, session introspection and logout.

use axum::extract::{Query, State};
use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;
use sticky_core::credentials::validate_login_fields;
use sticky_core::error::CoreError;
use sticky_core::types::DbId;

use crate::auth::credentials::Credentials;
use crate::auth::session::{clear_cookie, issue_cookie, Identity};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Query parameters for `POST /login`. Absent parameters read as empty.
#[derive(Debug, Deserialize)]
pub struct LoginParams {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /login?username=&password=
///
/// Registers the user on first sight, otherwise checks the password. Either
/// way a successful call sets the session cookie and answers 200.
pub async fn login(
    State(state): State<AppState>,
    Query(params): Query<LoginParams>,
) -> AppResult<impl IntoResponse> {
    validate_login_fields(&params.username, &params.password)?;

    let credentials = Credentials::new(&state.pool, &state.config.password_salt);
    let user_id = resolve_user(&credentials, &params.username, &params.password).await?;

    let cookie = issue_cookie(&params.username, user_id, &state.config.session)
        .map_err(|e| AppError::InternalError(format!("Session token error: {e}")))?;

    Ok((StatusCode::OK, [(SET_COOKIE, cookie.to_string())]))
}

/// GET /whoamai
///
/// Returns the session's username as plain text, or 400 without a session.
pub async fn whoami(identity: Identity) -> AppResult<String> {
    match identity {
        Identity::Authenticated { username, .. } => Ok(username),
        Identity::Anonymous => Err(AppError::BadRequest("No active session".into())),
    }
}

/// POST /logout
///
/// Clears the session cookie. Returns 204 No Content whether or not a session existed.
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    let cookie = clear_cookie(&state.config.session);
    (StatusCode::NO_CONTENT, [(SET_COOKIE, cookie.to_string())])
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Verify an existing user or register a new one, returning the user id.
///
/// If a concurrent login registers the same username between the existence
/// check and the insert, the insert loses on the unique key and the password
/// is verified against the winner's row instead.
async fn resolve_user(
    credentials: &Credentials<'_>,
    username: &str,
    password: &str,
) -> AppResult<DbId> {
    if credentials.user_exists(username).await? {
        return verify(credentials, username, password).await;
    }

    match credentials.register(username, password).await {
        Ok(user_id) => {
            tracing::info!(username, user_id, "Registered new user");
            Ok(user_id)
        }
        Err(AppError::Core(CoreError::Conflict(_))) => {
            tracing::debug!(username, "Username registered concurrently, verifying instead");
            verify(credentials, username, password).await
        }
        Err(e) => Err(e),
    }
}

async fn verify(credentials: &Credentials<'_>, username: &str, password: &str) -> AppResult<DbId> {
    match credentials.verify_password(username, password).await {
        Ok(user_id) => {
            tracing::info!(username, user_id, "User logged in");
            Ok(user_id)
        }
        Err(e) => {
            if matches!(e, AppError::Core(_)) {
                tracing::warn!(username, "Login rejected");
            }
            Err(e)
        }
    }
}
