//! Cryptographically secure random byte generation.
//!
//! Shared TOTP secrets must come from a cryptographically secure source;
//! a predictably seeded general-purpose generator would let an attacker
//! reconstruct every code a user will ever produce. This module uses the
//! platform CSPRNG via aws-lc-rs and surfaces its (rare) failure mode
//! instead of papering over it.

use aws_lc_rs::rand::{SecureRandom, SystemRandom};

use crate::error::{CryptoError, CryptoResult};

/// Fills a fresh buffer with `len` cryptographically secure random bytes.
///
/// The underlying source is safe for concurrent use.
///
/// # Errors
///
/// Returns [`CryptoError::EntropyUnavailable`] if the system random
/// source cannot supply the requested bytes.
pub fn random_bytes(len: usize) -> CryptoResult<Vec<u8>> {
    let rng = SystemRandom::new();
    let mut bytes = vec![0u8; len];
    rng.fill(&mut bytes)
        .map_err(|_| CryptoError::EntropyUnavailable)?;
    Ok(bytes)
}
