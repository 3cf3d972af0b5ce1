use serde::Serialize;
use std::env;

/// Connection settings for the store, resolved once at startup.
/// The rest of the application never touches the process environment;
/// it only sees this struct.
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    pub host: String,
    pub database: String,
    pub user: String,
    pub password: String,
}

impl Config {
    /// Read the four DB_* variables. A missing variable becomes an empty
    /// string: presence is not validated here, the connection step fails
    /// instead with the server's own diagnostics.
    pub fn from_env() -> Self {
        Self {
            host: env::var("DB_HOST").unwrap_or_default(),
            database: env::var("DB_DATABASE").unwrap_or_default(),
            user: env::var("DB_USER").unwrap_or_default(),
            password: env::var("DB_PASSWORD").unwrap_or_default(),
        }
    }

    /// Copy of the configuration safe to print or serialize.
    pub fn redacted(&self) -> Self {
        Self {
            password: "********".to_string(),
            ..self.clone()
        }
    }
}
