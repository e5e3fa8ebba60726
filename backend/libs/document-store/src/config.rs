use crate::env_utils::{non_empty_env, parse_env_with_default};
use std::fmt;
use thiserror::Error;

/// Why a store configuration could not be built from the environment
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("DATABASE_URL environment variable not set")]
    MissingUrl,

    #[error("DATABASE_NAME environment variable not set")]
    MissingName,
}

/// Document store connection configuration
#[derive(Clone)]
pub struct StoreConfig {
    /// Application name reported to the server
    pub app_name: String,
    /// Connection string
    pub database_url: String,
    /// Database holding the collections
    pub database_name: String,
    /// Maximum connections kept by the driver pool
    pub max_pool_size: u32,
    /// Timeout for opening a new connection
    pub connect_timeout_secs: u64,
    /// Timeout for finding a usable server
    pub server_selection_timeout_secs: u64,
}

impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("app_name", &self.app_name)
            .field("database_url", &"[REDACTED]")
            .field("database_name", &self.database_name)
            .field("max_pool_size", &self.max_pool_size)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field(
                "server_selection_timeout_secs",
                &self.server_selection_timeout_secs,
            )
            .finish()
    }
}

impl StoreConfig {
    pub fn new(app_name: &str, database_url: &str, database_name: &str) -> Self {
        Self {
            app_name: app_name.to_string(),
            database_url: database_url.to_string(),
            database_name: database_name.to_string(),
            max_pool_size: 10,
            connect_timeout_secs: 5,
            server_selection_timeout_secs: 5,
        }
    }

    /// Build the configuration from `DATABASE_URL`, `DATABASE_NAME` and the
    /// optional `DB_*` tuning variables.
    pub fn from_env(app_name: &str) -> Result<Self, ConfigError> {
        let database_url = non_empty_env("DATABASE_URL").ok_or(ConfigError::MissingUrl)?;
        let database_name = non_empty_env("DATABASE_NAME").ok_or(ConfigError::MissingName)?;

        let defaults = Self::new(app_name, &database_url, &database_name);
        Ok(Self {
            max_pool_size: parse_env_with_default("DB_MAX_POOL_SIZE", defaults.max_pool_size),
            connect_timeout_secs: parse_env_with_default(
                "DB_CONNECT_TIMEOUT_SECS",
                defaults.connect_timeout_secs,
            ),
            server_selection_timeout_secs: parse_env_with_default(
                "DB_SERVER_SELECTION_TIMEOUT_SECS",
                defaults.server_selection_timeout_secs,
            ),
            ..defaults
        })
    }

    /// Whether the URL selects the process-local store instead of MongoDB
    pub fn is_in_memory(&self) -> bool {
        self.database_url.starts_with("memory://")
    }
}
