//! Document store access
//!
//! Provides a collection-agnostic access layer over a schemaless document
//! database. Services talk to the [`DocumentStore`] trait; the MongoDB
//! implementation is used in deployments and the in-memory implementation
//! backs tests and database-less local runs.
//!
//! Records are raw BSON [`Document`]s. Identifier rendering for API
//! responses is left to the caller.

mod config;
pub mod env_utils;
mod error;
mod memory;
mod metrics;
mod mongo;

pub use bson::{doc, oid::ObjectId, Bson, Document};
pub use config::{ConfigError, StoreConfig};
pub use error::{Result, StoreError};
pub use memory::InMemoryDocumentStore;
pub use mongo::MongoDocumentStore;

use async_trait::async_trait;
use std::fmt;

/// Field stamped with the insertion time when a record does not carry one
pub const CREATED_AT: &str = "created_at";
/// Field stamped with the insertion time alongside `created_at`
pub const UPDATED_AT: &str = "updated_at";
/// Primary key field of every stored record
pub const ID_FIELD: &str = "_id";

/// Opaque identifier assigned by the store to a new record
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentId(Bson);

impl DocumentId {
    pub fn new(value: Bson) -> Self {
        Self(value)
    }

    pub fn as_bson(&self) -> &Bson {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Bson::ObjectId(oid) => f.write_str(&oid.to_hex()),
            Bson::String(s) => f.write_str(s),
            other => write!(f, "{}", other.clone().into_relaxed_extjson()),
        }
    }
}

/// Collection-agnostic access to a document database
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Name of the database this store reads from and writes to
    fn database_name(&self) -> &str;

    /// Insert `data` as a new record of `collection` and return its identifier.
    ///
    /// `created_at` and `updated_at` are set to the current time when absent.
    async fn create_document(&self, collection: &str, data: Document) -> Result<DocumentId>;

    /// Fetch up to `limit` records of `collection` whose fields equal every
    /// entry of `filter`, in store order.
    ///
    /// A missing collection yields an empty list. `limit == 0` yields an
    /// empty list without contacting the store.
    async fn get_documents(
        &self,
        collection: &str,
        filter: Document,
        limit: usize,
    ) -> Result<Vec<Document>>;

    /// Names of the collections present in the database
    async fn list_collection_names(&self) -> Result<Vec<String>>;
}

/// Set `created_at`/`updated_at` to now where missing or null.
pub(crate) fn stamp_timestamps(data: &mut Document) {
    let now = bson::DateTime::now();
    for field in [CREATED_AT, UPDATED_AT] {
        if matches!(data.get(field), None | Some(Bson::Null)) {
            data.insert(field, now);
        }
    }
}

/// Reject collection names MongoDB would refuse, so both stores agree.
pub(crate) fn validate_collection_name(collection: &str) -> Result<()> {
    if collection.is_empty()
        || collection.contains('$')
        || collection.contains('\0')
        || collection.starts_with("system.")
    {
        return Err(StoreError::InvalidCollectionName(collection.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_id_renders_as_hex() {
        let oid = ObjectId::parse_str("65a1b2c3d4e5f60718293a4b").unwrap();
        let id = DocumentId::new(Bson::ObjectId(oid));
        assert_eq!(id.to_string(), "65a1b2c3d4e5f60718293a4b");
    }

    #[test]
    fn string_id_renders_verbatim() {
        let id = DocumentId::new(Bson::String("alice-1".into()));
        assert_eq!(id.to_string(), "alice-1");
    }

    #[test]
    fn stamp_fills_missing_and_null_timestamps() {
        let mut data = doc! { "text": "hi", "updated_at": Bson::Null };
        stamp_timestamps(&mut data);

        assert!(matches!(data.get(CREATED_AT), Some(Bson::DateTime(_))));
        assert!(matches!(data.get(UPDATED_AT), Some(Bson::DateTime(_))));
    }

    #[test]
    fn stamp_keeps_caller_supplied_created_at() {
        let supplied = bson::DateTime::from_millis(1_700_000_000_000);
        let mut data = doc! { "created_at": supplied };
        stamp_timestamps(&mut data);

        assert_eq!(data.get_datetime(CREATED_AT).unwrap(), &supplied);
    }

    #[test]
    fn collection_names_are_checked() {
        assert!(validate_collection_name("post").is_ok());
        assert!(validate_collection_name("").is_err());
        assert!(validate_collection_name("bad$name").is_err());
        assert!(validate_collection_name("system.users").is_err());
    }
}
