//! Note entity models and DTOs.
//!
//! Field names on the wire follow the legacy API (`noteid`, `userid`), so
//! serialization renames them.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sticky_core::types::{DbId, Timestamp};

/// Note listing entry without the body text.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct NoteSummary {
    #[serde(rename = "noteid")]
    pub note_id: DbId,
    #[serde(rename = "userid")]
    pub user_id: DbId,
    pub title: String,
    pub color: String,
    pub created_at: Timestamp,
}

/// A single note including its body text.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct NoteDetail {
    #[serde(rename = "noteid")]
    pub note_id: DbId,
    #[serde(rename = "userid")]
    pub user_id: DbId,
    pub title: String,
    pub text: String,
    pub color: String,
    pub created_at: Timestamp,
}

/// DTO for inserting a note. `created_at` is assigned by the database.
#[derive(Debug)]
pub struct CreateNote {
    pub user_id: DbId,
    pub title: String,
    pub text: String,
    pub color: String,
}
