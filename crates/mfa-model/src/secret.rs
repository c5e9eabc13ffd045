//! Shared TOTP secret.
//!
//! The secret is an opaque byte sequence owned by exactly one user. At the
//! provisioning and storage boundaries it is represented as Base32
//! (RFC 4648, no padding), the encoding authenticator apps consume.

use std::fmt;

use data_encoding::BASE32_NOPAD;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error returned when a textual secret cannot be decoded.
#[derive(Debug, Error)]
#[error("invalid base32 secret")]
pub struct SecretParseError;

/// An opaque shared secret for one-time-password generation.
///
/// ## Security Note
///
/// The raw bytes are deliberately hard to leak: `Debug` redacts the
/// content and there is no `Display` implementation. Serialization uses
/// the Base32 boundary encoding; the binary form never appears in logs
/// or transport payloads.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TotpSecret(Vec<u8>);

impl TotpSecret {
    /// Minimum secret length accepted at generation time, in bytes.
    ///
    /// RFC 4226 requires at least 128 bits; RFC 6238 recommends matching
    /// the HMAC block, so 20 bytes (160 bits) is the generation default.
    pub const MIN_LENGTH: usize = 16;

    /// Recommended secret length in bytes (160 bits, per RFC 6238).
    pub const RECOMMENDED_LENGTH: usize = 20;

    /// Wraps raw secret bytes.
    ///
    /// No length policy is enforced here; verification must keep working
    /// against whatever was stored at enrollment. Generation-time length
    /// checks live in the engine.
    #[must_use]
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Decodes a secret from its Base32 (RFC 4648, no padding) form.
    ///
    /// Whitespace is stripped and lowercase letters are accepted, since
    /// humans re-type these strings during manual enrollment.
    ///
    /// # Errors
    ///
    /// Returns [`SecretParseError`] if the input is not valid Base32.
    pub fn from_base32(encoded: &str) -> Result<Self, SecretParseError> {
        let clean: String = encoded
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_uppercase())
            .collect();
        let bytes = BASE32_NOPAD
            .decode(clean.as_bytes())
            .map_err(|_| SecretParseError)?;
        Ok(Self(bytes))
    }

    /// Returns the Base32 (RFC 4648, no padding) boundary encoding.
    #[must_use]
    pub fn to_base32(&self) -> String {
        BASE32_NOPAD.encode(&self.0)
    }

    /// Returns the raw secret bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the secret length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks whether the secret is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for TotpSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TotpSecret({} bytes redacted)", self.0.len())
    }
}

impl Serialize for TotpSecret {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_base32())
    }
}

impl<'de> Deserialize<'de> for TotpSecret {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        Self::from_base32(&encoded).map_err(serde::de::Error::custom)
    }
}
