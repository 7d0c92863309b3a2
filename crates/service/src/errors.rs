use thiserror::Error;

use models::errors::ModelError;

/// Failures reported by a record store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store refused the write because the key already exists.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
    #[error("database error: {0}")]
    Db(String),
}

impl From<ModelError> for StoreError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Duplicate(msg) => StoreError::ConstraintViolation(msg),
            ModelError::Validation(msg) | ModelError::Db(msg) => StoreError::Db(msg),
        }
    }
}
