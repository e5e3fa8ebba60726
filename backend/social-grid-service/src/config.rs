/// Configuration management for Social Grid Service
///
/// Settings come from environment variables, with a `.env` file loaded first
/// when present. Database settings are read separately by the document store
/// so that a missing database never blocks startup.
use document_store::env_utils::{non_empty_env, parse_env_with_default};
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Database presence as seen by the diagnostics endpoint
    pub database: DatabaseConfig,
    /// Listing endpoint defaults
    pub listing: ListingConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (development, staging, production)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
    /// Number of HTTP worker threads
    pub workers: usize,
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins, `*` for any
    pub allowed_origins: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Whether `DATABASE_URL` is set; the value itself is never kept here
    pub url_set: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingConfig {
    /// `limit` used by list endpoints when the query omits it
    pub default_limit: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: AppConfig {
                env: "development".to_string(),
                host: "0.0.0.0".to_string(),
                port: 8000,
                workers: 4,
            },
            cors: CorsConfig {
                allowed_origins: "*".to_string(),
            },
            database: DatabaseConfig { url_set: false },
            listing: ListingConfig { default_limit: 20 },
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();

        let defaults = Config::default();

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|e| format!("Failed to parse PORT='{}': {}", raw, e))?,
            Err(_) => defaults.app.port,
        };

        let default_limit: i64 =
            parse_env_with_default("DEFAULT_LIST_LIMIT", defaults.listing.default_limit);
        if default_limit < 0 {
            return Err(format!(
                "DEFAULT_LIST_LIMIT must not be negative, got {}",
                default_limit
            ));
        }

        Ok(Config {
            app: AppConfig {
                env: std::env::var("APP_ENV").unwrap_or(defaults.app.env),
                host: std::env::var("HOST").unwrap_or(defaults.app.host),
                port,
                workers: parse_env_with_default("HTTP_WORKERS", defaults.app.workers).max(1),
            },
            cors: CorsConfig {
                allowed_origins: non_empty_env("CORS_ALLOWED_ORIGINS")
                    .unwrap_or(defaults.cors.allowed_origins),
            },
            database: DatabaseConfig {
                url_set: non_empty_env("DATABASE_URL").is_some(),
            },
            listing: ListingConfig { default_limit },
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.app.host, self.app.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clear_env() {
        for key in [
            "APP_ENV",
            "HOST",
            "PORT",
            "HTTP_WORKERS",
            "CORS_ALLOWED_ORIGINS",
            "DATABASE_URL",
            "DEFAULT_LIST_LIMIT",
        ] {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial_test::serial]
    fn defaults_when_environment_is_empty() {
        clear_env();
        let config = Config::from_env().unwrap();

        assert_eq!(config.app.port, 8000);
        assert_eq!(config.app.host, "0.0.0.0");
        assert_eq!(config.cors.allowed_origins, "*");
        assert!(!config.database.url_set);
        assert_eq!(config.listing.default_limit, 20);
        assert_eq!(config.bind_address(), "0.0.0.0:8000");
    }

    #[test]
    #[serial_test::serial]
    fn port_and_database_presence_are_read() {
        clear_env();
        std::env::set_var("PORT", "9100");
        std::env::set_var("DATABASE_URL", "mongodb://localhost:27017");

        let config = Config::from_env().unwrap();
        assert_eq!(config.app.port, 9100);
        assert!(config.database.url_set);
        clear_env();
    }

    #[test]
    #[serial_test::serial]
    fn invalid_port_is_rejected() {
        clear_env();
        std::env::set_var("PORT", "eighty");
        assert!(Config::from_env().is_err());
        clear_env();
    }

    #[test]
    #[serial_test::serial]
    fn negative_default_limit_is_rejected() {
        clear_env();
        std::env::set_var("DEFAULT_LIST_LIMIT", "-5");
        assert!(Config::from_env().is_err());
        clear_env();
    }
}
