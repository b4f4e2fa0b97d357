//! Route definitions for the `/note` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::notes;
use crate::state::AppState;

/// ```text
/// GET  /note                   -> list_notes
/// POST /note                   -> create_note
/// GET  /note/{noteid}          -> get_note
/// GET  /note/author/{userid}   -> list_notes_by_author
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/note", get(notes::list_notes).post(notes::create_note))
        .route("/note/{noteid}", get(notes::get_note))
        .route("/note/author/{userid}", get(notes::list_notes_by_author))
}
