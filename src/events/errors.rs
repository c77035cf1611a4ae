//! # Event Errors
//!
//! Domain error taxonomy for catalog operations.

use thiserror::Error;

use crate::store::StoreError;

/// Result type for catalog operations
pub type EventResult<T> = Result<T, EventError>;

/// Catalog operation errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EventError {
    /// Input violates a field constraint
    #[error("{0}")]
    Validation(String),

    /// No event under the requested id
    #[error("Event not found")]
    NotFound,

    /// Create targeted an id that is already taken
    #[error("Event with this ID already exists")]
    DuplicateId,

    /// Partial update carried an empty change set
    #[error("No fields to update")]
    NoFieldsProvided,

    /// Backend fault, surfaced with the underlying message
    #[error("Database error: {0}")]
    Store(String),
}

impl From<StoreError> for EventError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::ConditionFailed(_) => EventError::DuplicateId,
            StoreError::ItemNotFound(_) => EventError::NotFound,
            other => EventError::Store(other.to_string()),
        }
    }
}
