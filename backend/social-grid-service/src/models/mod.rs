/// Data models for social-grid-service
///
/// - `schemas`: collection schemas (profile, post, follow, user, product)
/// - `api`: request and response bodies of the HTTP endpoints
pub mod api;
pub mod schemas;

pub use api::{
    CreatePostRequest, CreatedResponse, DiagnosticsResponse, ItemsResponse, LimitQuery,
    MessageResponse,
};
pub use schemas::{Follow, Post, Product, Profile, User};

use bson::Document;
use serde::Serialize;

/// A record type stored in its own collection
pub trait Entity: Serialize {
    /// Collection holding records of this type
    const COLLECTION: &'static str;

    fn to_document(&self) -> Result<Document, bson::ser::Error> {
        bson::to_document(self)
    }
}
