//! TOTP credential domain model.
//!
//! A credential binds one shared secret to one user identity, together
//! with the code-generation parameters the user's authenticator app was
//! provisioned with. The parameters are fixed at enrollment; changing
//! them afterwards would silently invalidate every code the app produces.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::algorithm::OtpHashAlgorithm;
use crate::secret::TotpSecret;

/// Default number of code digits (RFC 6238 convention).
pub const DEFAULT_DIGITS: u8 = 6;

/// Default time step in seconds (RFC 6238 convention).
pub const DEFAULT_PERIOD_SECONDS: u32 = 30;

/// A user's TOTP credential.
///
/// Exactly one user owns each credential; the storage layer keys
/// retrieval by `user_id`.
///
/// ## Security Note
///
/// `secret` is sensitive. The [`TotpSecret`] type redacts itself in
/// `Debug` output, so deriving `Debug` here is safe; implementations
/// persisting credentials should still encrypt them at rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TotpCredential {
    /// Unique identifier.
    pub id: Uuid,
    /// User this credential belongs to.
    pub user_id: Uuid,
    /// The shared secret.
    pub secret: TotpSecret,
    /// Number of digits in generated codes (6–8).
    pub digits: u8,
    /// Time step in seconds.
    pub period_seconds: u32,
    /// Hash algorithm.
    pub algorithm: OtpHashAlgorithm,
    /// User-facing label (e.g., the account email shown in the app).
    pub label: Option<String>,
    /// When the credential was created.
    pub created_at: DateTime<Utc>,
}

impl TotpCredential {
    /// Creates a credential with RFC 6238 default parameters.
    #[must_use]
    pub fn new(user_id: Uuid, secret: TotpSecret) -> Self {
        Self {
            id: Uuid::now_v7(),
            user_id,
            secret,
            digits: DEFAULT_DIGITS,
            period_seconds: DEFAULT_PERIOD_SECONDS,
            algorithm: OtpHashAlgorithm::Sha1,
            label: None,
            created_at: Utc::now(),
        }
    }

    /// Sets the number of digits.
    #[must_use]
    pub const fn with_digits(mut self, digits: u8) -> Self {
        self.digits = digits;
        self
    }

    /// Sets the time step in seconds.
    #[must_use]
    pub const fn with_period(mut self, period_seconds: u32) -> Self {
        self.period_seconds = period_seconds;
        self
    }

    /// Sets the hash algorithm.
    #[must_use]
    pub const fn with_algorithm(mut self, algorithm: OtpHashAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets the user-facing label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}
