//! HTTP request and response bodies

use super::Post;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Body of `POST /api/posts`
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreatePostRequest {
    /// Handle of the author
    #[validate(length(min = 1))]
    pub author_handle: String,
    /// Post content, at most 280 characters
    #[validate(length(max = 280))]
    pub text: String,
    /// Optional image
    #[serde(default)]
    pub image_url: Option<String>,
}

impl From<CreatePostRequest> for Post {
    fn from(req: CreatePostRequest) -> Self {
        Post {
            author_handle: req.author_handle,
            text: req.text,
            image_url: req.image_url,
            likes: 0,
            created_at: None,
        }
    }
}

/// `limit` query parameter of the list endpoints
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LimitQuery {
    /// Maximum number of records to return (default 20)
    pub limit: Option<i64>,
}

impl LimitQuery {
    /// Effective limit: the default when absent, an error when negative.
    pub fn resolve(&self, default: i64) -> Result<usize, AppError> {
        let limit = self.limit.unwrap_or(default);
        usize::try_from(limit)
            .map_err(|_| AppError::Validation(format!("limit must be >= 0, got {}", limit)))
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Records with identifiers rendered as strings
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ItemsResponse {
    #[schema(value_type = Vec<Object>)]
    pub items: Vec<serde_json::Value>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    /// Identifier of the new record
    pub id: String,
}

/// Body of `GET /test`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DiagnosticsResponse {
    pub backend: String,
    pub database: String,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub connection_status: String,
    pub collections: Vec<String>,
}
