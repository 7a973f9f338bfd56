//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for researchd
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum ResearchdError {
    /// Malformed or missing input; the caller can correct and retry
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity absent, or present but not owned by the caller
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Access denied: {0}")]
    AccessDenied(String),

    /// Blob store write/delete failure
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResearchdError {
    /// `NotFound` for an entity kind and id, worded the same everywhere
    pub fn not_found(entity: &str, id: i64) -> Self {
        Self::NotFound(format!("{entity} {id} not found"))
    }

    /// True for errors the caller caused and can see verbatim
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Validation(_)
                | Self::NotFound(_)
                | Self::AccessDenied(_)
                | Self::Conflict(_)
                | Self::Storage(_)
        )
    }
}

/// Result type alias for researchd operations
pub type Result<T> = std::result::Result<T, ResearchdError>;
