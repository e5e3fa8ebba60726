//! Shared fixtures for the HTTP tests

use async_trait::async_trait;
use document_store::{Document, DocumentId, DocumentStore, InMemoryDocumentStore, StoreError};
use social_grid_service::{AppState, Config, DatabaseHandle};
use std::sync::Arc;

/// Store whose every operation fails the way an unreachable server does
pub struct FailingStore;

#[async_trait]
impl DocumentStore for FailingStore {
    fn database_name(&self) -> &str {
        "grid"
    }

    async fn create_document(
        &self,
        _collection: &str,
        _data: Document,
    ) -> document_store::Result<DocumentId> {
        Err(StoreError::Driver("connection refused".to_string()))
    }

    async fn get_documents(
        &self,
        _collection: &str,
        _filter: Document,
        _limit: usize,
    ) -> document_store::Result<Vec<Document>> {
        Err(StoreError::Driver("connection refused".to_string()))
    }

    async fn list_collection_names(&self) -> document_store::Result<Vec<String>> {
        Err(StoreError::Driver("connection refused".to_string()))
    }
}

pub fn memory_store() -> Arc<InMemoryDocumentStore> {
    Arc::new(InMemoryDocumentStore::new("grid"))
}

pub fn state_with_store(store: Arc<dyn DocumentStore>) -> AppState {
    let mut config = Config::default();
    config.database.url_set = true;
    AppState::with_store(config, store)
}

pub fn unconfigured_state() -> AppState {
    AppState::new(Config::default(), DatabaseHandle::Unconfigured)
}

macro_rules! init_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($state))
                .configure(social_grid_service::configure_routes),
        )
        .await
    };
}
