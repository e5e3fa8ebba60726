use crate::config::Config;
use crate::error::AppError;
use document_store::{
    ConfigError, DocumentStore, InMemoryDocumentStore, MongoDocumentStore, StoreConfig,
};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Outcome of the one-time store initialisation at startup
pub enum DatabaseHandle {
    /// `DATABASE_URL` is not set
    Unconfigured,
    /// `DATABASE_URL` is set but `DATABASE_NAME` is not
    Uninitialized,
    /// The client could not be created
    Failed(String),
    Ready(Arc<dyn DocumentStore>),
}

impl DatabaseHandle {
    /// Read the store settings from the environment and create the store.
    ///
    /// Never fails: problems are kept as state and surfaced by `/test`.
    pub async fn from_env(app_name: &str) -> Self {
        match StoreConfig::from_env(app_name) {
            Ok(config) => Self::connect(&config).await,
            Err(ConfigError::MissingUrl) => {
                warn!("DATABASE_URL not set; data endpoints will fail until configured");
                DatabaseHandle::Unconfigured
            }
            Err(ConfigError::MissingName) => {
                warn!("DATABASE_NAME not set; database left uninitialized");
                DatabaseHandle::Uninitialized
            }
        }
    }

    pub async fn connect(config: &StoreConfig) -> Self {
        if config.is_in_memory() {
            info!(database = %config.database_name, "Using in-memory document store");
            return DatabaseHandle::Ready(Arc::new(InMemoryDocumentStore::new(
                &config.database_name,
            )));
        }

        match MongoDocumentStore::connect(config).await {
            Ok(store) => DatabaseHandle::Ready(Arc::new(store)),
            Err(e) => {
                error!("Document store initialization failed: {}", e);
                DatabaseHandle::Failed(e.to_string())
            }
        }
    }

    /// The store, or an error when none was initialised
    pub fn store(&self) -> Result<Arc<dyn DocumentStore>, AppError> {
        match self {
            DatabaseHandle::Ready(store) => Ok(store.clone()),
            DatabaseHandle::Unconfigured => Err(AppError::DatabaseUnavailable(
                "DATABASE_URL is not set".to_string(),
            )),
            DatabaseHandle::Uninitialized => Err(AppError::DatabaseUnavailable(
                "DATABASE_NAME is not set".to_string(),
            )),
            DatabaseHandle::Failed(reason) => Err(AppError::DatabaseUnavailable(reason.clone())),
        }
    }
}

/// Shared state handed to every handler through `web::Data`
#[derive(Clone)]
pub struct AppState {
    pub database: Arc<DatabaseHandle>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config, database: DatabaseHandle) -> Self {
        Self {
            database: Arc::new(database),
            config: Arc::new(config),
        }
    }

    /// State backed by an already-built store
    pub fn with_store(config: Config, store: Arc<dyn DocumentStore>) -> Self {
        Self::new(config, DatabaseHandle::Ready(store))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn in_memory_url_yields_ready_store() {
        let config = StoreConfig::new("test", "memory://", "grid");
        let handle = DatabaseHandle::connect(&config).await;

        let store = handle.store().unwrap();
        assert_eq!(store.database_name(), "grid");
    }

    #[tokio::test]
    async fn malformed_url_is_kept_as_failure() {
        let config = StoreConfig::new("test", "not-a-connection-string", "grid");
        let handle = DatabaseHandle::connect(&config).await;

        assert!(matches!(handle, DatabaseHandle::Failed(_)));
        assert!(matches!(
            handle.store(),
            Err(AppError::DatabaseUnavailable(_))
        ));
    }

    #[test]
    fn unconfigured_handle_refuses_store_access() {
        let handle = DatabaseHandle::Unconfigured;
        assert!(handle.store().is_err());
    }
}
