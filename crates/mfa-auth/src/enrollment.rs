//! Secret generation and enrollment.
//!
//! Enrollment produces everything the caller needs to finish setting up
//! a user's authenticator: a fresh credential to persist through the
//! storage layer, and the provisioning URI to hand to a QR renderer.
//! Nothing here is retained by the engine itself.

use mfa_model::{ProvisioningRecord, TotpCredential, TotpSecret};
use uuid::Uuid;

use crate::error::{AuthError, AuthResult};
use crate::otp::TotpConfig;
use crate::provisioning::build_uri;

/// Default generated secret length in bytes (160 bits, per RFC 6238).
pub const DEFAULT_SECRET_LENGTH: usize = TotpSecret::RECOMMENDED_LENGTH;

/// Generates a fresh shared secret from the system CSPRNG.
///
/// # Errors
///
/// - [`AuthError::InvalidConfiguration`] if `length_bytes` is below the
///   16-byte minimum
/// - [`AuthError::InsufficientEntropy`] if the random source cannot
///   supply the requested bytes
pub fn generate_secret(length_bytes: usize) -> AuthResult<TotpSecret> {
    if length_bytes < TotpSecret::MIN_LENGTH {
        return Err(AuthError::InvalidConfiguration(format!(
            "secret length must be at least {} bytes, got {length_bytes}",
            TotpSecret::MIN_LENGTH
        )));
    }

    let bytes = mfa_crypto::random_bytes(length_bytes)
        .map_err(|_| AuthError::InsufficientEntropy)?;
    Ok(TotpSecret::new(bytes))
}

/// The output of starting an enrollment for one user.
#[derive(Debug, Clone)]
pub struct Enrollment {
    /// The credential to persist via the storage layer.
    pub credential: TotpCredential,
    /// The `otpauth://` URI for the user's authenticator app.
    pub provisioning_uri: String,
}

impl Enrollment {
    /// Starts an enrollment: generates a secret, shapes it into a
    /// credential with the configured parameters, and builds the
    /// provisioning URI.
    ///
    /// The caller owns persistence (via `SecretStore`) and QR rendering;
    /// if either fails, simply drop the [`Enrollment`] and start over —
    /// no engine state needs cleanup.
    ///
    /// # Errors
    ///
    /// - [`AuthError::InvalidConfiguration`] if the config is out of range
    /// - [`AuthError::InsufficientEntropy`] if secret generation fails
    /// - [`AuthError::InvalidLabel`] if `account_label` is empty
    pub fn begin(
        user_id: Uuid,
        issuer: &str,
        account_label: &str,
        config: &TotpConfig,
    ) -> AuthResult<Self> {
        config.validate()?;

        let secret = generate_secret(DEFAULT_SECRET_LENGTH)?;
        let credential = TotpCredential::new(user_id, secret)
            .with_digits(config.digits)
            .with_period(config.period_seconds)
            .with_algorithm(config.algorithm)
            .with_label(account_label);

        let record = ProvisioningRecord::from_credential(&credential, issuer);
        let provisioning_uri = build_uri(&record)?;

        Ok(Self {
            credential,
            provisioning_uri,
        })
    }
}
