use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Built once at startup; cheap to clone (the pool and config are reference-counted).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: sticky_db::DbPool,
    /// Server configuration, including the password salt and session secret.
    pub config: Arc<ServerConfig>,
}
