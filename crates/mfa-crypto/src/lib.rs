//! # mfa-crypto
//!
//! Cryptographic primitives for the TOTP MFA subsystem, built on aws-lc-rs.
//!
//! This crate provides exactly the operations the one-time-password engine
//! needs and nothing more:
//!
//! - HMAC with SHA-1, SHA-256, and SHA-512 (RFC 4226/6238 allow all three;
//!   SHA-1 remains the interoperability default for authenticator apps)
//! - Cryptographically secure random byte generation for shared secrets
//! - Constant-time byte comparison for code verification
//!
//! ## Security Note
//!
//! HMAC-SHA1 is retained solely because RFC 6238 and the deployed
//! authenticator-app ecosystem require it. It is not exposed for any use
//! other than one-time-password generation.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod compare;
pub mod error;
pub mod hmac;
pub mod random;

pub use compare::constant_time_eq;
pub use error::{CryptoError, CryptoResult};
pub use hmac::{hmac_sha1, hmac_sha256, hmac_sha512};
pub use random::random_bytes;
