//! Error types for the storage layer.

use thiserror::Error;

/// Result type alias for storage operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Error taxonomy surfaced by the repository layer.
///
/// Callers can map each kind distinctly: validation failures never touch the
/// store, not-found conditions identify the missing entity, and everything
/// else is a storage failure that has already been rolled back.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("validation failed: {message}")]
    Validation { message: String },

    #[error("chat with id={0} not found")]
    ChatNotFound(i64),

    #[error("message with id={0} not found")]
    MessageNotFound(i64),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Whether this error maps to a missing-resource outcome
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ChatNotFound(_) | Self::MessageNotFound(_))
    }
}
