/// Profile service - listing of profile records
use crate::error::Result;
use crate::models::{Entity, Profile};
use document_store::{doc, Document, DocumentStore};
use std::sync::Arc;

pub struct ProfileService {
    store: Arc<dyn DocumentStore>,
}

impl ProfileService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Up to `limit` profiles in store order
    pub async fn list(&self, limit: usize) -> Result<Vec<Document>> {
        let profiles = self
            .store
            .get_documents(Profile::COLLECTION, doc! {}, limit)
            .await?;
        Ok(profiles)
    }
}
