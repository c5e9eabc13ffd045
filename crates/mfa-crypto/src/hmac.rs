//! HMAC functions for one-time-password generation.
//!
//! RFC 4226 defines HOTP over HMAC-SHA1; RFC 6238 extends TOTP to
//! HMAC-SHA256 and HMAC-SHA512. All three are provided here with the
//! same signature so the engine can dispatch on a configured algorithm.

use aws_lc_rs::hmac;

/// Computes an HMAC-SHA1 tag over `data` using `key`.
///
/// SHA-1 is the default algorithm of the authenticator-app ecosystem
/// and is required for RFC 6238 interoperability.
#[must_use]
pub fn hmac_sha1(key: &[u8], data: &[u8]) -> Vec<u8> {
    let key = hmac::Key::new(hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY, key);
    hmac::sign(&key, data).as_ref().to_vec()
}

/// Computes an HMAC-SHA256 tag over `data` using `key`.
#[must_use]
pub fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    let key = hmac::Key::new(hmac::HMAC_SHA256, key);
    hmac::sign(&key, data).as_ref().to_vec()
}

/// Computes an HMAC-SHA512 tag over `data` using `key`.
#[must_use]
pub fn hmac_sha512(key: &[u8], data: &[u8]) -> Vec<u8> {
    let key = hmac::Key::new(hmac::HMAC_SHA512, key);
    hmac::sign(&key, data).as_ref().to_vec()
}
