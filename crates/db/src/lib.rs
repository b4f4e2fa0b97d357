//! MySQL persistence for users and notes.

use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::MySqlPool;

/// Create a connection pool from prepared connect options.
pub async fn create_pool(
    options: MySqlConnectOptions,
    max_connections: u32,
) -> Result<DbPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Round-trip a trivial query to confirm the pool can reach the server.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Create the `user` and `note` tables if they do not exist yet.
///
/// The embedded migrations only contain `CREATE TABLE IF NOT EXISTS`, so this
/// is safe to run on every startup and against a pre-existing schema.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await?;
    tracing::debug!("Schema migrations up to date");
    Ok(())
}
