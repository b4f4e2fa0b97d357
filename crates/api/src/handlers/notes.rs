//! Handlers for the `/note` resource.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use sticky_core::error::CoreError;
use sticky_core::note::validate_note_fields;
use sticky_core::types::DbId;
use sticky_db::models::note::{CreateNote, NoteDetail, NoteSummary};
use sticky_db::repositories::NoteRepo;

use crate::auth::session::Identity;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /note`. Absent fields read as empty strings.
#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub color: String,
}

/// Response body for `POST /note`.
#[derive(Debug, Serialize)]
pub struct CreateNoteResponse {
    pub noteid: DbId,
}

/// GET /note
pub async fn list_notes(State(state): State<AppState>) -> AppResult<Json<Vec<NoteSummary>>> {
    let notes = NoteRepo::list(&state.pool).await?;
    Ok(Json(notes))
}

/// GET /note/{noteid}
pub async fn get_note(
    State(state): State<AppState>,
    Path(note_id): Path<DbId>,
) -> AppResult<Json<NoteDetail>> {
    let note = NoteRepo::find_by_id(&state.pool, note_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Note",
            id: note_id,
        }))?;
    Ok(Json(note))
}

/// POST /note
///
/// The owner is the session user, or `0` without a session.
pub async fn create_note(
    State(state): State<AppState>,
    identity: Identity,
    Json(input): Json<CreateNoteRequest>,
) -> AppResult<Json<CreateNoteResponse>> {
    validate_note_fields(&input.title, &input.text, &input.color)?;

    let create = CreateNote {
        user_id: identity.user_id_or_anonymous(),
        title: input.title,
        text: input.text,
        color: input.color,
    };
    let noteid = NoteRepo::create(&state.pool, &create).await?;

    tracing::debug!(noteid, user_id = create.user_id, "Note created");
    Ok(Json(CreateNoteResponse { noteid }))
}

/// GET /note/author/{userid}
pub async fn list_notes_by_author(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<Vec<NoteSummary>>> {
    let notes = NoteRepo::list_by_author(&state.pool, user_id).await?;
    Ok(Json(notes))
}
