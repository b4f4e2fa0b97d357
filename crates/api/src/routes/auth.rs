//! Route definitions for login and session endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// ```text
/// POST /login     -> login
/// GET  /whoamai   -> whoami
/// POST /logout    -> logout
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/whoamai", get(auth::whoami))
        .route("/logout", post(auth::logout))
}
