//! Credential store: the `user` table seen through password hashing.

use sticky_core::error::CoreError;
use sticky_core::types::DbId;
use sticky_db::models::user::CreateUser;
use sticky_db::repositories::UserRepo;
use sticky_db::DbPool;

use crate::auth::password::{hash_password, verify_password};
use crate::error::{is_unique_violation, AppError, AppResult};

/// Borrowed view over the pool and the configured server salt.
///
/// Built per request from [`crate::state::AppState`]; holds no state of its own.
pub struct Credentials<'a> {
    pool: &'a DbPool,
    salt: &'a str,
}

impl<'a> Credentials<'a> {
    pub fn new(pool: &'a DbPool, salt: &'a str) -> Self {
        Self { pool, salt }
    }

    pub async fn user_exists(&self, username: &str) -> AppResult<bool> {
        Ok(UserRepo::exists(self.pool, username).await?)
    }

    /// Hash the password and insert a new user, returning the generated id.
    ///
    /// A username that is already taken yields [`CoreError::Conflict`].
    pub async fn register(&self, username: &str, password: &str) -> AppResult<DbId> {
        let password_hash = hash_password(password, self.salt)
            .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

        let input = CreateUser {
            username: username.to_string(),
            password_hash,
        };
        UserRepo::create(self.pool, &input).await.map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Core(CoreError::Conflict(format!(
                    "Username '{username}' is already taken"
                )))
            } else {
                AppError::Database(e)
            }
        })
    }

    /// Check a password against the stored hash, returning the owner's id.
    ///
    /// Unknown usernames and wrong passwords both yield
    /// [`CoreError::Unauthorized`].
    pub async fn verify_password(&self, username: &str, password: &str) -> AppResult<DbId> {
        let user = UserRepo::find_by_username(self.pool, username)
            .await?
            .ok_or_else(invalid_credentials)?;

        let valid = verify_password(password, self.salt, &user.password_hash)
            .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

        if valid {
            Ok(user.user_id)
        } else {
            Err(invalid_credentials())
        }
    }
}

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized(
        "Invalid username or password".into(),
    ))
}
