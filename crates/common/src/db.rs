//! Shared storage error types for Sports Manager
//!
//! Every document-store backend reports failures through `RepositoryError`,
//! which converts into the API-level `Error`.

use crate::error::Error;
use thiserror::Error;

/// Storage-specific error types
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Record already exists: {0}")]
    AlreadyExists(String),

    #[error("Database connection error: {0}")]
    Connection(#[from] sqlx::Error),

    #[error("Document (de)serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<RepositoryError> for Error {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => Error::NotFound("Record not found".to_string()),
            RepositoryError::AlreadyExists(what) => Error::Conflict(what),
            RepositoryError::Connection(e) => Error::Database(e),
            RepositoryError::Serialization(e) => Error::Serialization(e),
            RepositoryError::InvalidData(msg) => Error::Validation(msg),
        }
    }
}
