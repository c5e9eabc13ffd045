//! Hash algorithm selection for one-time passwords.

use serde::{Deserialize, Serialize};

/// Hash algorithm used for one-time-password generation.
///
/// RFC 6238 permits SHA-1, SHA-256, and SHA-512. SHA-1 is the default:
/// despite its weaknesses as a collision-resistant hash, HMAC-SHA1
/// remains sound for this use and is what the installed base of
/// authenticator apps expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OtpHashAlgorithm {
    /// HMAC-SHA1 (default, widely supported).
    Sha1,
    /// HMAC-SHA256.
    Sha256,
    /// HMAC-SHA512.
    Sha512,
}

impl OtpHashAlgorithm {
    /// Returns the algorithm name as rendered in provisioning URIs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sha1 => "SHA1",
            Self::Sha256 => "SHA256",
            Self::Sha512 => "SHA512",
        }
    }
}

impl Default for OtpHashAlgorithm {
    fn default() -> Self {
        Self::Sha1
    }
}
