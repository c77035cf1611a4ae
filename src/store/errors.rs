//! # Store Errors
//!
//! Error types for the key-value store backend.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store backend errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Update expression does not match the grammar
    #[error("invalid update expression: {0}")]
    ExpressionSyntax(String),

    /// Bare reserved identifier used as an attribute path
    #[error("reserved word used as attribute name: {0}")]
    ReservedWord(String),

    /// `#name` alias with no entry in the name bindings
    #[error("unbound name placeholder: {0}")]
    UnboundName(String),

    /// `:token` with no entry in the value bindings
    #[error("unbound value placeholder: {0}")]
    UnboundValue(String),

    /// Update targeted a key that is not in the table
    #[error("item not found: {0}")]
    ItemNotFound(String),

    /// Conditional write refused because the condition did not hold
    #[error("conditional write failed for key: {0}")]
    ConditionFailed(String),

    /// Record is not a JSON object or lacks a usable key attribute
    #[error("invalid record: {0}")]
    InvalidRecord(String),

    /// Store-internal fault
    #[error("store fault: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_context() {
        let err = StoreError::ReservedWord("status".to_string());
        assert_eq!(
            err.to_string(),
            "reserved word used as attribute name: status"
        );

        let err = StoreError::UnboundValue(":capacity".to_string());
        assert!(err.to_string().contains(":capacity"));
    }
}
