//! Repository for the `note` table.

use sticky_core::types::DbId;

use crate::models::note::{CreateNote, NoteDetail, NoteSummary};
use crate::DbPool;

/// Columns for listing queries (no body text).
const SUMMARY_COLUMNS: &str =
    "noteid AS note_id, userid AS user_id, title, color, createdAt AS created_at";

/// Columns for single-note queries.
const DETAIL_COLUMNS: &str =
    "noteid AS note_id, userid AS user_id, title, `text`, color, createdAt AS created_at";

/// Inserts and read-back of notes. Notes are never updated or deleted.
pub struct NoteRepo;

impl NoteRepo {
    /// Insert a note, returning the generated `noteid`.
    pub async fn create(pool: &DbPool, input: &CreateNote) -> Result<DbId, sqlx::Error> {
        let result =
            sqlx::query("INSERT INTO note (userid, title, `text`, color) VALUES (?, ?, ?, ?)")
                .bind(input.user_id)
                .bind(&input.title)
                .bind(&input.text)
                .bind(&input.color)
                .execute(pool)
                .await?;
        Ok(result.last_insert_id())
    }

    /// List every note in insertion order.
    pub async fn list(pool: &DbPool) -> Result<Vec<NoteSummary>, sqlx::Error> {
        let query = format!("SELECT {SUMMARY_COLUMNS} FROM note ORDER BY noteid");
        sqlx::query_as::<_, NoteSummary>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a note with its body text.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<NoteDetail>, sqlx::Error> {
        let query = format!("SELECT {DETAIL_COLUMNS} FROM note WHERE noteid = ?");
        sqlx::query_as::<_, NoteDetail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the notes owned by `user_id` in insertion order.
    ///
    /// `user_id = 0` lists notes submitted without a session.
    pub async fn list_by_author(
        pool: &DbPool,
        user_id: DbId,
    ) -> Result<Vec<NoteSummary>, sqlx::Error> {
        let query =
            format!("SELECT {SUMMARY_COLUMNS} FROM note WHERE userid = ? ORDER BY noteid");
        sqlx::query_as::<_, NoteSummary>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
