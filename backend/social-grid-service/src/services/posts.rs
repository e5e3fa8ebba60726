/// Post service - post creation
use crate::error::Result;
use crate::models::{CreatePostRequest, Entity, Post};
use document_store::{DocumentId, DocumentStore};
use std::sync::Arc;
use validator::Validate;

pub struct PostService {
    store: Arc<dyn DocumentStore>,
}

impl PostService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Store a new post with zero likes; `created_at` is set by the store
    pub async fn create(&self, req: CreatePostRequest) -> Result<DocumentId> {
        let post = Post::from(req);
        post.validate()?;

        let id = self
            .store
            .create_document(Post::COLLECTION, post.to_document()?)
            .await?;

        tracing::info!(author = %post.author_handle, post_id = %id, "post created");
        Ok(id)
    }
}
