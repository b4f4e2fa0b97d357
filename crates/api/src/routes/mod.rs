pub mod auth;
pub mod health;
pub mod notes;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /login                   login or register (public)
/// /whoamai                 session username
/// /logout                  clear session cookie
///
/// /note                    list summaries, create
/// /note/{noteid}           get one note with text
/// /note/author/{userid}    list summaries by owner
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(notes::router())
}
