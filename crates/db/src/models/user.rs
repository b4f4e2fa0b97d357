//! User entity model and DTOs.

use sqlx::FromRow;
use sticky_core::types::DbId;

/// Full row from the `user` table.
///
/// Contains the password hash -- never serialize this to API responses.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub user_id: DbId,
    pub username: String,
    pub password_hash: String,
}

/// DTO for creating a new user. `password_hash` is already hashed.
#[derive(Debug)]
pub struct CreateUser {
    pub username: String,
    pub password_hash: String,
}
