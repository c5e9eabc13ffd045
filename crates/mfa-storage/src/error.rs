//! Storage error types.

use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur during secret storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No credential exists for the user.
    #[error("no TOTP credential found for user {user_id}")]
    NotFound {
        /// The user that has no stored credential.
        user_id: Uuid,
    },

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Backend connection error.
    #[error("storage connection error: {0}")]
    Connection(String),

    /// Internal error.
    #[error("internal storage error: {0}")]
    Internal(String),
}

impl StorageError {
    /// Creates a not-found error for a user.
    #[must_use]
    pub const fn not_found(user_id: Uuid) -> Self {
        Self::NotFound { user_id }
    }

    /// Checks if this is a not-found error.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
