/// Error types for Social Grid Service
///
/// Every error renders as `{"detail": "<message>"}` with a matching status.
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use document_store::StoreError;
use thiserror::Error;

/// Result type for social-grid-service operations
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// Request shape or parameter rejected before touching the store
    #[error("{0}")]
    Validation(String),

    /// Body could not be parsed at all
    #[error("{0}")]
    BadRequest(String),

    /// Store operation failed
    #[error("{0}")]
    Store(#[from] StoreError),

    /// No usable store was initialised at startup
    #[error("Database not available: {0}")]
    DatabaseUnavailable(String),

    #[error("{0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Store(_) | AppError::DatabaseUnavailable(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "detail": self.to_string(),
        }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

impl From<bson::ser::Error> for AppError {
    fn from(err: bson::ser::Error) -> Self {
        AppError::Internal(format!("Failed to encode document: {}", err))
    }
}
