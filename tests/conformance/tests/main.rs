//! MFA Conformance Test Suite
//!
//! Validates the one-time-password engine against the published RFC test
//! vectors and the verification-window semantics the subsystem promises.
//!
//! ## Coverage
//!
//! - RFC 4226 Appendix D HOTP vectors
//! - RFC 6238 Appendix B TOTP vectors (SHA-1, SHA-256, SHA-512)
//! - Clock-skew window semantics and malformed-input rejection
//! - Provisioning URI round-trips
//! - Secret generation properties
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p mfa-conformance-tests
//! ```

mod provisioning;
mod rfc4226;
mod rfc6238;
mod verification;
