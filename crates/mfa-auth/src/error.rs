//! Authentication engine error types.
//!
//! Every variant is a local validation failure, surfaced immediately to
//! the caller and never retried internally. A rejected one-time code is
//! not an error — see [`Verification`](crate::otp::Verification) — so
//! callers can count lockout attempts correctly without conflating bad
//! codes with bad requests.

use thiserror::Error;

/// Errors produced by the TOTP engine.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The system random source could not supply the requested bytes.
    #[error("random source could not supply the requested entropy")]
    InsufficientEntropy,

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The shared secret is empty.
    #[error("secret must not be empty")]
    InvalidSecret,

    /// The submitted code has the wrong shape (length or character set).
    ///
    /// Raised before any code computation; the check depends only on the
    /// submitted string and the configured digit count, so it leaks no
    /// secret-dependent information.
    #[error("malformed one-time code: {0}")]
    MalformedInput(String),

    /// The provisioning account label is empty.
    #[error("account label must not be empty")]
    InvalidLabel,

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Checks whether this error was caused by caller-supplied input,
    /// as opposed to configuration or the environment.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::MalformedInput(_) | Self::InvalidLabel)
    }
}

/// Result type for engine operations.
pub type AuthResult<T> = Result<T, AuthError>;
