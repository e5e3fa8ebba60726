use mongodb::error::{ErrorKind, WriteFailure};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Server error code for a unique index violation
const DUPLICATE_KEY_CODE: i32 = 11000;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The driver or the server rejected the operation
    #[error("{0}")]
    Driver(String),

    /// A record with the same `_id` already exists in the collection
    #[error("{0}")]
    DuplicateKey(String),

    #[error("Invalid collection name: {0:?}")]
    InvalidCollectionName(String),
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        if let ErrorKind::Write(WriteFailure::WriteError(write_error)) = err.kind.as_ref() {
            if write_error.code == DUPLICATE_KEY_CODE {
                return StoreError::DuplicateKey(err.to_string());
            }
        }
        StoreError::Driver(err.to_string())
    }
}
