/// Feed service - latest posts, newest first
///
/// The feed reads up to `limit` posts in store order and orders that page by
/// `created_at` in memory. Records without a usable `created_at` rank as the
/// oldest; equal timestamps keep their store order.
use crate::error::Result;
use crate::models::{Entity, Post};
use bson::Bson;
use chrono::DateTime;
use document_store::{doc, Document, DocumentStore, CREATED_AT};
use std::sync::Arc;

pub struct FeedService {
    store: Arc<dyn DocumentStore>,
}

impl FeedService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn latest(&self, limit: usize) -> Result<Vec<Document>> {
        let mut posts = self
            .store
            .get_documents(Post::COLLECTION, doc! {}, limit)
            .await?;
        sort_by_created_at_desc(&mut posts);
        Ok(posts)
    }
}

/// `created_at` in epoch milliseconds, from a BSON datetime or an RFC 3339 string
pub fn created_at_millis(record: &Document) -> Option<i64> {
    match record.get(CREATED_AT)? {
        Bson::DateTime(dt) => Some(dt.timestamp_millis()),
        Bson::String(raw) => DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.timestamp_millis()),
        _ => None,
    }
}

/// Stable sort, newest first, undated records last
pub fn sort_by_created_at_desc(records: &mut [Document]) {
    // None < Some, so comparing b to a sends undated records to the end
    records.sort_by(|a, b| created_at_millis(b).cmp(&created_at_millis(a)));
}
