//! Process-local document store
//!
//! Keeps every collection as an insertion-ordered list behind a tokio
//! `RwLock`. Identifiers are fresh `ObjectId`s, as MongoDB would assign.

use crate::{
    stamp_timestamps, validate_collection_name, DocumentId, DocumentStore, Result, StoreError,
    ID_FIELD,
};
use async_trait::async_trait;
use bson::{oid::ObjectId, Bson, Document};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

pub struct InMemoryDocumentStore {
    database_name: String,
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl InMemoryDocumentStore {
    pub fn new(database_name: &str) -> Self {
        Self {
            database_name: database_name.to_string(),
            collections: RwLock::new(HashMap::new()),
        }
    }
}

fn matches_filter(record: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(field, expected)| record.get(field) == Some(expected))
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    fn database_name(&self) -> &str {
        &self.database_name
    }

    async fn create_document(&self, collection: &str, data: Document) -> Result<DocumentId> {
        validate_collection_name(collection)?;

        let mut data = data;
        stamp_timestamps(&mut data);

        let id = match data.remove(ID_FIELD) {
            Some(Bson::Null) | None => Bson::ObjectId(ObjectId::new()),
            Some(existing) => existing,
        };

        // _id leads the record, matching the server's layout
        let mut record = Document::new();
        record.insert(ID_FIELD, id.clone());
        for (field, value) in data {
            record.insert(field, value);
        }

        let mut collections = self.collections.write().await;
        let records = collections.entry(collection.to_string()).or_default();
        if records.iter().any(|existing| existing.get(ID_FIELD) == Some(&id)) {
            return Err(StoreError::DuplicateKey(format!(
                "E11000 duplicate key error collection: {}.{} dup key: {{ _id: {} }}",
                self.database_name,
                collection,
                DocumentId::new(id)
            )));
        }
        records.push(record);

        debug!(collection, "inserted document into in-memory store");
        Ok(DocumentId::new(id))
    }

    async fn get_documents(
        &self,
        collection: &str,
        filter: Document,
        limit: usize,
    ) -> Result<Vec<Document>> {
        validate_collection_name(collection)?;
        if limit == 0 {
            return Ok(Vec::new());
        }

        let collections = self.collections.read().await;
        let records: Vec<Document> = collections
            .get(collection)
            .map(|records| {
                records
                    .iter()
                    .filter(|record| matches_filter(record, &filter))
                    .take(limit)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        debug!(collection, limit, returned = records.len(), "queried in-memory store");
        Ok(records)
    }

    async fn list_collection_names(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = self.collections.read().await.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[tokio::test]
    async fn insert_assigns_object_id_and_timestamps() {
        let store = InMemoryDocumentStore::new("grid");
        let id = store
            .create_document("post", doc! { "author_handle": "alice", "text": "hello" })
            .await
            .unwrap();

        assert!(matches!(id.as_bson(), Bson::ObjectId(_)));

        let records = store.get_documents("post", doc! {}, 10).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get(ID_FIELD), Some(id.as_bson()));
        assert_eq!(records[0].keys().next().map(String::as_str), Some(ID_FIELD));
        assert!(records[0].get_datetime("created_at").is_ok());
        assert!(records[0].get_datetime("updated_at").is_ok());
    }

    #[tokio::test]
    async fn missing_collection_reads_as_empty() {
        let store = InMemoryDocumentStore::new("grid");
        let records = store.get_documents("profile", doc! {}, 20).await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn limit_caps_results_in_insertion_order() {
        let store = InMemoryDocumentStore::new("grid");
        for n in 0..5 {
            store
                .create_document("post", doc! { "n": n })
                .await
                .unwrap();
        }

        let records = store.get_documents("post", doc! {}, 3).await.unwrap();
        let seen: Vec<i32> = records.iter().map(|r| r.get_i32("n").unwrap()).collect();
        assert_eq!(seen, vec![0, 1, 2]);

        let none = store.get_documents("post", doc! {}, 0).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn equality_filter_selects_matching_records() {
        let store = InMemoryDocumentStore::new("grid");
        store
            .create_document("post", doc! { "author_handle": "alice", "text": "a" })
            .await
            .unwrap();
        store
            .create_document("post", doc! { "author_handle": "bob", "text": "b" })
            .await
            .unwrap();

        let records = store
            .get_documents("post", doc! { "author_handle": "bob" }, 10)
            .await
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get_str("text").unwrap(), "b");
    }

    #[tokio::test]
    async fn collection_names_are_listed() {
        let store = InMemoryDocumentStore::new("grid");
        store.create_document("profile", doc! {}).await.unwrap();
        store.create_document("post", doc! {}).await.unwrap();

        let names = store.list_collection_names().await.unwrap();
        assert_eq!(names, vec!["post".to_string(), "profile".to_string()]);
    }

    #[tokio::test]
    async fn duplicate_id_is_rejected_and_first_record_kept() {
        let store = InMemoryDocumentStore::new("grid");
        store
            .create_document("profile", doc! { "_id": "alice-1", "handle": "alice" })
            .await
            .unwrap();

        let err = store
            .create_document("profile", doc! { "_id": "alice-1", "handle": "impostor" })
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateKey(_)));
        assert!(err.to_string().contains("alice-1"));

        let records = store.get_documents("profile", doc! {}, 10).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get_str("handle").unwrap(), "alice");

        // Same id in another collection is fine
        assert!(store
            .create_document("post", doc! { "_id": "alice-1" })
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn invalid_collection_is_rejected() {
        let store = InMemoryDocumentStore::new("grid");
        assert!(store.create_document("", doc! {}).await.is_err());
    }
}
