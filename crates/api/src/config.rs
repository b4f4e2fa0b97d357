use sqlx::mysql::MySqlConnectOptions;

use crate::auth::session::SessionConfig;

/// Server configuration loaded from environment variables.
///
/// Constructed once in `main` and shared through [`crate::state::AppState`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Secret appended to every password before hashing.
    pub password_salt: String,
    /// Session cookie signing and lifetime settings.
    pub session: SessionConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Required | Default                    |
    /// |------------------------|----------|----------------------------|
    /// | `HOST`                 | no       | `0.0.0.0`                  |
    /// | `PORT`                 | no       | `3000`                     |
    /// | `CORS_ORIGINS`         | no       | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | no       | `30`                       |
    /// | `PASSWORD_SALT`        | **yes**  | --                         |
    ///
    /// Session settings are documented on [`SessionConfig::from_env`].
    ///
    /// # Panics
    ///
    /// Panics if `PASSWORD_SALT` is unset or a numeric variable does not parse.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let password_salt =
            std::env::var("PASSWORD_SALT").expect("PASSWORD_SALT must be set in the environment");
        if password_salt.is_empty() {
            tracing::warn!("PASSWORD_SALT is empty; passwords are hashed without a server secret");
        }

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            password_salt,
            session: SessionConfig::from_env(),
        }
    }
}

/// MySQL connection settings, only needed while building the pool.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub user: String,
    pub password: String,
    pub hostname: String,
    pub port: u16,
    pub database: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Load database settings from environment variables.
    ///
    /// | Env Var              | Required | Default     |
    /// |----------------------|----------|-------------|
    /// | `MYSQL_USER`         | **yes**  | --          |
    /// | `MYSQL_PASSWORD`     | no       | empty       |
    /// | `MYSQL_HOSTNAME`     | no       | `localhost` |
    /// | `MYSQL_PORT`         | no       | `3306`      |
    /// | `MYSQL_DATABASE`     | **yes**  | --          |
    /// | `DB_MAX_CONNECTIONS` | no       | `20`        |
    pub fn from_env() -> Self {
        let user = std::env::var("MYSQL_USER").expect("MYSQL_USER must be set");
        let password = std::env::var("MYSQL_PASSWORD").unwrap_or_default();
        let hostname = std::env::var("MYSQL_HOSTNAME").unwrap_or_else(|_| "localhost".into());

        let port: u16 = std::env::var("MYSQL_PORT")
            .unwrap_or_else(|_| "3306".into())
            .parse()
            .expect("MYSQL_PORT must be a valid u16");

        let database = std::env::var("MYSQL_DATABASE").expect("MYSQL_DATABASE must be set");

        let max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "20".into())
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        Self {
            user,
            password,
            hostname,
            port,
            database,
            max_connections,
        }
    }

    /// Connect options for the pool, pinned to `utf8mb4_unicode_ci`.
    pub fn connect_options(&self) -> MySqlConnectOptions {
        let options = MySqlConnectOptions::new()
            .host(&self.hostname)
            .port(self.port)
            .username(&self.user)
            .database(&self.database)
            .charset("utf8mb4")
            .collation("utf8mb4_unicode_ci");

        if self.password.is_empty() {
            options
        } else {
            options.password(&self.password)
        }
    }
}

/// Split a comma-separated origin list, dropping blanks.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Interpret common truthy spellings (`1`, `true`, `yes`, `on`).
pub fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_trimmed_and_blank_entries_dropped() {
        let origins = parse_origins(" http://a.test , ,http://b.test,");
        assert_eq!(origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn flag_parsing() {
        assert!(parse_flag("true"));
        assert!(parse_flag(" YES "));
        assert!(parse_flag("1"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn connect_options_carry_host_and_database() {
        let config = DatabaseConfig {
            user: "sticky".into(),
            password: String::new(),
            hostname: "db.internal".into(),
            port: 3307,
            database: "notes".into(),
            max_connections: 5,
        };
        let options = config.connect_options();
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 3307);
        assert_eq!(options.get_database(), Some("notes"));
    }
}
