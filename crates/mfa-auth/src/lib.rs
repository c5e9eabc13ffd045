//! # mfa-auth
//!
//! TOTP/HOTP verification engine for multi-factor authentication.
//!
//! This crate is the core of the MFA subsystem: it generates per-user
//! shared secrets, renders the provisioning URIs authenticator apps
//! import, and verifies submitted codes with clock-skew tolerance.
//!
//! ## Features
//!
//! - RFC 4226 HOTP and RFC 6238 TOTP code generation (SHA-1/256/512,
//!   6–8 digits)
//! - Windowed TOTP verification with constant-time code comparison
//! - Injectable clock for deterministic verification under test
//! - `otpauth://` provisioning URI construction
//! - Enrollment helper bundling secret generation and provisioning
//!
//! ## Statelessness
//!
//! Every operation here is a pure function of its inputs plus the
//! supplied instant: no shared mutable state, no locks, safe for
//! unlimited concurrent invocation. Secrets are loaded per call through
//! the storage layer and never cached. Anti-replay and rate limiting are
//! deliberately left to the caller — see
//! [`Verification`](otp::Verification) for the counter callers persist
//! to reject replays.
//!
//! ## Example
//!
//! ```
//! use mfa_auth::{Enrollment, OtpVerifier, SystemClock, TotpConfig};
//! use uuid::Uuid;
//!
//! let config = TotpConfig::new();
//! let enrollment = Enrollment::begin(
//!     Uuid::now_v7(),
//!     "ExampleCorp",
//!     "user@example.com",
//!     &config,
//! )?;
//!
//! // Persist enrollment.credential via a SecretStore, render
//! // enrollment.provisioning_uri as a QR code, then verify codes:
//! let result = OtpVerifier::verify_totp(
//!     &enrollment.credential.secret,
//!     "123456",
//!     &config,
//!     &SystemClock,
//! )?;
//! assert!(!result.is_accepted() || result.matched_counter().is_some());
//! # Ok::<(), mfa_auth::AuthError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod clock;
pub mod enrollment;
pub mod error;
pub mod otp;
pub mod provisioning;

pub use clock::{counter_at, Clock, FixedClock, SystemClock};
pub use enrollment::{generate_secret, Enrollment, DEFAULT_SECRET_LENGTH};
pub use error::{AuthError, AuthResult};
pub use otp::{HotpConfig, HotpVerification, OtpVerifier, TotpConfig, Verification};
pub use provisioning::build_uri;
