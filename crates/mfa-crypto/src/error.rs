//! Cryptographic error types.

use thiserror::Error;

/// Errors that can occur during cryptographic operations.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// The system random source could not supply the requested bytes.
    ///
    /// This is surfaced immediately to the caller and never retried
    /// internally; secret generation must not fall back to a weaker
    /// source.
    #[error("random source could not supply the requested entropy")]
    EntropyUnavailable,

    /// Internal cryptographic failure.
    #[error("internal cryptographic error: {0}")]
    Internal(String),
}

/// Result type for cryptographic operations.
pub type CryptoResult<T> = Result<T, CryptoError>;
