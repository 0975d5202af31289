//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business rule failures surfaced by the services.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl DomainError {
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }
}

/// Storage-level errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage connection failed: {0}")]
    Connection(String),

    #[error("Storage operation failed: {0}")]
    Operation(String),

    #[error("Corrupt value at key {key}: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
