//! MongoDB-backed document store
//!
//! The driver opens connections lazily and pools them itself; this wrapper
//! adds no retries or locking of its own.

use crate::metrics::record_operation;
use crate::{
    stamp_timestamps, validate_collection_name, DocumentId, DocumentStore, Result, StoreConfig,
    StoreError,
};
use async_trait::async_trait;
use bson::Document;
use futures::TryStreamExt;
use mongodb::{options::ClientOptions, Client, Database};
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

pub struct MongoDocumentStore {
    database: Database,
}

impl MongoDocumentStore {
    /// Create a client for `config`. No network round trip happens here.
    pub async fn connect(config: &StoreConfig) -> Result<Self> {
        let mut options = ClientOptions::parse(&config.database_url).await?;
        options.app_name = Some(config.app_name.clone());
        options.max_pool_size = Some(config.max_pool_size);
        options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
        options.server_selection_timeout =
            Some(Duration::from_secs(config.server_selection_timeout_secs));

        let client = Client::with_options(options)?;
        let database = client.database(&config.database_name);

        info!(
            database = %config.database_name,
            max_pool_size = config.max_pool_size,
            "MongoDB client created"
        );

        Ok(Self { database })
    }
}

fn log_failure(operation: &str, collection: &str, err: &StoreError) {
    error!(operation, collection, error = %err, "MongoDB operation failed");
}

#[async_trait]
impl DocumentStore for MongoDocumentStore {
    fn database_name(&self) -> &str {
        self.database.name()
    }

    async fn create_document(&self, collection: &str, data: Document) -> Result<DocumentId> {
        validate_collection_name(collection)?;

        let mut data = data;
        stamp_timestamps(&mut data);

        let started = Instant::now();
        let result = self
            .database
            .collection::<Document>(collection)
            .insert_one(data)
            .await
            .map_err(StoreError::from);
        record_operation("insert_one", collection, started, result.is_ok());

        match result {
            Ok(inserted) => {
                debug!(collection, "inserted document");
                Ok(DocumentId::new(inserted.inserted_id))
            }
            Err(err) => {
                log_failure("insert_one", collection, &err);
                Err(err)
            }
        }
    }

    async fn get_documents(
        &self,
        collection: &str,
        filter: Document,
        limit: usize,
    ) -> Result<Vec<Document>> {
        validate_collection_name(collection)?;
        // The server reads a zero limit as "no limit"
        if limit == 0 {
            return Ok(Vec::new());
        }

        let started = Instant::now();
        let result = async {
            let cursor = self
                .database
                .collection::<Document>(collection)
                .find(filter)
                .limit(i64::try_from(limit).unwrap_or(i64::MAX))
                .await?;
            cursor.try_collect::<Vec<Document>>().await
        }
        .await
        .map_err(StoreError::from);
        record_operation("find", collection, started, result.is_ok());

        match result {
            Ok(records) => {
                debug!(collection, limit, returned = records.len(), "queried documents");
                Ok(records)
            }
            Err(err) => {
                log_failure("find", collection, &err);
                Err(err)
            }
        }
    }

    async fn list_collection_names(&self) -> Result<Vec<String>> {
        let started = Instant::now();
        let result = self
            .database
            .list_collection_names()
            .await
            .map_err(StoreError::from);
        record_operation("list_collections", "*", started, result.is_ok());

        result.map_err(|err| {
            log_failure("list_collections", "*", &err);
            err
        })
    }
}
