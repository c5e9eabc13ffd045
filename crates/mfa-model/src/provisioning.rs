//! Provisioning record.
//!
//! Assembled once at enrollment and rendered into an `otpauth://` URI;
//! not retained afterwards unless the caller persists the credential.

use crate::algorithm::OtpHashAlgorithm;
use crate::credential::TotpCredential;
use crate::secret::TotpSecret;

/// The data an authenticator app needs to import a credential.
#[derive(Debug, Clone)]
pub struct ProvisioningRecord {
    /// Provider or service name (e.g., "ExampleCorp").
    pub issuer: String,
    /// Account label, usually the user's email or username.
    pub account_label: String,
    /// The shared secret.
    pub secret: TotpSecret,
    /// Hash algorithm.
    pub algorithm: OtpHashAlgorithm,
    /// Number of digits in generated codes.
    pub digits: u8,
    /// Time step in seconds.
    pub period_seconds: u32,
}

impl ProvisioningRecord {
    /// Builds a provisioning record from a credential.
    ///
    /// The account label falls back to the credential's stored label, or
    /// an empty string when neither is present (which the URI builder
    /// rejects).
    #[must_use]
    pub fn from_credential(credential: &TotpCredential, issuer: impl Into<String>) -> Self {
        Self {
            issuer: issuer.into(),
            account_label: credential.label.clone().unwrap_or_default(),
            secret: credential.secret.clone(),
            algorithm: credential.algorithm,
            digits: credential.digits,
            period_seconds: credential.period_seconds,
        }
    }
}
