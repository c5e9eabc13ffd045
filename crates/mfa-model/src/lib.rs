//! # mfa-model
//!
//! Domain model for the TOTP MFA subsystem.
//!
//! This crate defines the entities shared by the engine and storage
//! layers:
//!
//! - [`TotpSecret`] — an opaque per-user shared secret with its Base32
//!   boundary encoding
//! - [`OtpHashAlgorithm`] — the hash algorithms permitted by RFC 6238
//! - [`TotpCredential`] — one secret record per user identity
//! - [`ProvisioningRecord`] — the data rendered into an `otpauth://` URI
//!   at enrollment
//!
//! ## Security Note
//!
//! Each [`TotpCredential`] belongs to exactly one user. Secrets are never
//! shared across users and never held in process-wide state; retrieval is
//! keyed by user through the storage layer.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod algorithm;
pub mod credential;
pub mod provisioning;
pub mod secret;

pub use algorithm::OtpHashAlgorithm;
pub use credential::TotpCredential;
pub use provisioning::ProvisioningRecord;
pub use secret::{SecretParseError, TotpSecret};
