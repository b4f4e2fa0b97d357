//! Repository for the `user` table.

use sticky_core::types::DbId;

use crate::models::user::{CreateUser, User};
use crate::DbPool;

/// Column list shared across queries, aliased to the model's field names.
const COLUMNS: &str = "userid AS user_id, username, password AS password_hash";

/// Existence checks, inserts and lookups for user credentials.
pub struct UserRepo;

impl UserRepo {
    /// Whether a row with this exact username exists.
    pub async fn exists(pool: &DbPool, username: &str) -> Result<bool, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM `user` WHERE username = ?")
            .bind(username)
            .fetch_one(pool)
            .await?;
        Ok(count > 0)
    }

    /// Insert a new user, returning the generated `userid`.
    ///
    /// Fails with a unique violation if the username is already taken.
    pub async fn create(pool: &DbPool, input: &CreateUser) -> Result<DbId, sqlx::Error> {
        let result = sqlx::query("INSERT INTO `user` (username, password) VALUES (?, ?)")
            .bind(&input.username)
            .bind(&input.password_hash)
            .execute(pool)
            .await?;
        Ok(result.last_insert_id())
    }

    /// Find a user by username (exact match under the column collation).
    pub async fn find_by_username(
        pool: &DbPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM `user` WHERE username = ?");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by id.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM `user` WHERE userid = ?");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Total number of users.
    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM `user`")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
