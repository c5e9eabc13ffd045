//! One-Time Password generation and verification.
//!
//! Implements HOTP (RFC 4226) and TOTP (RFC 6238). TOTP is HOTP with a
//! counter derived from wall-clock time: `TOTP(K) = HOTP(K, floor(T / X))`
//! where X is the step duration.
//!
//! ## Verification semantics
//!
//! TOTP verification tolerates a configurable window of adjacent counters
//! to absorb clock skew between the client device and the server.
//! Candidates are checked in ascending distance from the current counter,
//! ties broken toward the earlier counter (order 0, -1, +1, -2, +2, …):
//! clocks usually agree, so the common case is checked first, and the
//! fixed order minimizes timing signal about which offset matched.
//!
//! ## Replay
//!
//! This engine is stateless and does not itself prevent replay of a
//! previously accepted code within the same window. Callers needing
//! anti-replay must track the last accepted counter per secret and reject
//! a resubmission of the same or earlier counter. The accepted counter is
//! returned for exactly this purpose; HOTP verification likewise returns
//! the next counter to persist.

use chrono::{DateTime, Utc};
use mfa_crypto::{constant_time_eq, hmac_sha1, hmac_sha256, hmac_sha512};
use mfa_model::{OtpHashAlgorithm, TotpCredential, TotpSecret};

use crate::clock::{counter_at, Clock};
use crate::error::{AuthError, AuthResult};

/// TOTP verification configuration.
#[derive(Debug, Clone)]
pub struct TotpConfig {
    /// Number of digits in the OTP (6–8).
    pub digits: u8,
    /// Time step in seconds.
    pub period_seconds: u32,
    /// Hash algorithm.
    pub algorithm: OtpHashAlgorithm,
    /// Number of adjacent counters accepted on each side of the current
    /// one. Window 1 tolerates one step of clock skew either way.
    pub window: u32,
}

impl Default for TotpConfig {
    fn default() -> Self {
        Self {
            digits: 6,
            period_seconds: 30,
            algorithm: OtpHashAlgorithm::Sha1,
            window: 1,
        }
    }
}

impl TotpConfig {
    /// Creates a configuration with RFC 6238 defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of digits.
    #[must_use]
    pub const fn digits(mut self, digits: u8) -> Self {
        self.digits = digits;
        self
    }

    /// Sets the time step in seconds.
    #[must_use]
    pub const fn period(mut self, period_seconds: u32) -> Self {
        self.period_seconds = period_seconds;
        self
    }

    /// Sets the hash algorithm.
    #[must_use]
    pub const fn algorithm(mut self, algorithm: OtpHashAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets the verification window.
    #[must_use]
    pub const fn window(mut self, window: u32) -> Self {
        self.window = window;
        self
    }

    /// Creates a configuration matching a stored credential's parameters,
    /// with the default verification window.
    #[must_use]
    pub fn for_credential(credential: &TotpCredential) -> Self {
        Self::default()
            .digits(credential.digits)
            .period(credential.period_seconds)
            .algorithm(credential.algorithm)
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidConfiguration`] if digits are outside
    /// 6–8 or the period is zero.
    pub fn validate(&self) -> AuthResult<()> {
        if !(6..=8).contains(&self.digits) {
            return Err(AuthError::InvalidConfiguration(format!(
                "digits must be between 6 and 8, got {}",
                self.digits
            )));
        }
        if self.period_seconds == 0 {
            return Err(AuthError::InvalidConfiguration(
                "time step must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// HOTP verification configuration.
#[derive(Debug, Clone)]
pub struct HotpConfig {
    /// Number of digits in the OTP (6–8).
    pub digits: u8,
    /// Hash algorithm.
    pub algorithm: OtpHashAlgorithm,
    /// Look-ahead window for counter resynchronization.
    pub look_ahead: u32,
}

impl Default for HotpConfig {
    fn default() -> Self {
        Self {
            digits: 6,
            algorithm: OtpHashAlgorithm::Sha1,
            look_ahead: 10,
        }
    }
}

impl HotpConfig {
    /// Creates a configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of digits.
    #[must_use]
    pub const fn digits(mut self, digits: u8) -> Self {
        self.digits = digits;
        self
    }

    /// Sets the hash algorithm.
    #[must_use]
    pub const fn algorithm(mut self, algorithm: OtpHashAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets the look-ahead window.
    #[must_use]
    pub const fn look_ahead(mut self, count: u32) -> Self {
        self.look_ahead = count;
        self
    }
}

/// Outcome of a TOTP verification.
///
/// A rejected code is an expected outcome, not an error; malformed input
/// is reported separately as [`AuthError::MalformedInput`] so callers can
/// apply correct lockout counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    /// The code matched a counter within the window.
    Accepted {
        /// The counter that matched. Callers implementing anti-replay
        /// should persist this and reject codes for the same or earlier
        /// counters.
        counter: u64,
    },
    /// No counter within the window produced the submitted code.
    Rejected,
}

impl Verification {
    /// Checks if the code was accepted.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Returns the matched counter, if accepted.
    #[must_use]
    pub const fn matched_counter(&self) -> Option<u64> {
        match self {
            Self::Accepted { counter } => Some(*counter),
            Self::Rejected => None,
        }
    }
}

/// Outcome of an HOTP verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotpVerification {
    /// The code matched a counter within the look-ahead window.
    Accepted {
        /// The counter value the caller should persist for the next
        /// verification (one past the matched counter).
        next_counter: u64,
    },
    /// No counter within the look-ahead window produced the code.
    Rejected,
}

impl HotpVerification {
    /// Checks if the code was accepted.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// OTP code generation and verification.
pub struct OtpVerifier;

impl OtpVerifier {
    /// Generates an HOTP code for a counter (RFC 4226).
    ///
    /// The counter is encoded as an 8-byte big-endian integer, HMACed
    /// with the secret, and dynamically truncated to a 31-bit integer
    /// reduced modulo `10^digits`, zero-padded on the left.
    ///
    /// Deterministic: identical inputs always yield the identical code.
    ///
    /// # Errors
    ///
    /// - [`AuthError::InvalidSecret`] if the secret is empty
    /// - [`AuthError::InvalidConfiguration`] if digits are outside 6–8
    pub fn generate_hotp(
        secret: &TotpSecret,
        counter: u64,
        digits: u8,
        algorithm: OtpHashAlgorithm,
    ) -> AuthResult<String> {
        if secret.is_empty() {
            return Err(AuthError::InvalidSecret);
        }
        if !(6..=8).contains(&digits) {
            return Err(AuthError::InvalidConfiguration(format!(
                "digits must be between 6 and 8, got {digits}"
            )));
        }

        let hmac = Self::compute_hmac(secret.as_bytes(), counter, algorithm);
        let code = Self::truncate(&hmac, digits);
        Ok(format!("{code:0width$}", width = digits as usize))
    }

    /// Generates the TOTP code for an instant.
    ///
    /// # Errors
    ///
    /// Propagates counter derivation and code generation failures.
    pub fn generate_totp(
        secret: &TotpSecret,
        config: &TotpConfig,
        now: DateTime<Utc>,
    ) -> AuthResult<String> {
        let counter = counter_at(now, config.period_seconds)?;
        Self::generate_hotp(secret, counter, config.digits, config.algorithm)
    }

    /// Verifies a TOTP code against the clock's current instant.
    ///
    /// # Errors
    ///
    /// See [`OtpVerifier::verify_totp_at`].
    pub fn verify_totp(
        secret: &TotpSecret,
        submitted: &str,
        config: &TotpConfig,
        clock: &dyn Clock,
    ) -> AuthResult<Verification> {
        Self::verify_totp_at(secret, submitted, config, clock.now())
    }

    /// Verifies a TOTP code at an explicit instant.
    ///
    /// Counters in `[current - window, current + window]` are accepted,
    /// checked in ascending distance from the current counter with ties
    /// broken toward the earlier counter. Comparison is constant-time.
    ///
    /// # Errors
    ///
    /// - [`AuthError::MalformedInput`] if the submitted code has the
    ///   wrong length or contains non-digit characters (checked before
    ///   any code computation)
    /// - [`AuthError::InvalidSecret`] if the secret is empty
    /// - [`AuthError::InvalidConfiguration`] if the configuration is out
    ///   of range
    pub fn verify_totp_at(
        secret: &TotpSecret,
        submitted: &str,
        config: &TotpConfig,
        now: DateTime<Utc>,
    ) -> AuthResult<Verification> {
        config.validate()?;
        Self::check_code_shape(submitted, config.digits)?;

        let current = counter_at(now, config.period_seconds)?;

        for distance in 0..=u64::from(config.window) {
            let mut candidates = [None, None];
            if distance == 0 {
                candidates[0] = Some(current);
            } else {
                candidates[0] = current.checked_sub(distance);
                candidates[1] = current.checked_add(distance);
            }

            for counter in candidates.into_iter().flatten() {
                let expected =
                    Self::generate_hotp(secret, counter, config.digits, config.algorithm)?;
                if constant_time_eq(submitted.as_bytes(), expected.as_bytes()) {
                    return Ok(Verification::Accepted { counter });
                }
            }
        }

        tracing::debug!(window = config.window, "totp code rejected");
        Ok(Verification::Rejected)
    }

    /// Verifies an HOTP code starting from a stored counter.
    ///
    /// Counters in `[counter, counter + look_ahead]` are accepted. On
    /// success the caller must persist the returned `next_counter`;
    /// that persistence is what prevents replay for HOTP.
    ///
    /// # Errors
    ///
    /// Same input and configuration failures as TOTP verification.
    pub fn verify_hotp(
        secret: &TotpSecret,
        counter: u64,
        submitted: &str,
        config: &HotpConfig,
    ) -> AuthResult<HotpVerification> {
        if !(6..=8).contains(&config.digits) {
            return Err(AuthError::InvalidConfiguration(format!(
                "digits must be between 6 and 8, got {}",
                config.digits
            )));
        }
        Self::check_code_shape(submitted, config.digits)?;

        for offset in 0..=u64::from(config.look_ahead) {
            let candidate = counter.saturating_add(offset);
            let expected =
                Self::generate_hotp(secret, candidate, config.digits, config.algorithm)?;
            if constant_time_eq(submitted.as_bytes(), expected.as_bytes()) {
                return Ok(HotpVerification::Accepted {
                    next_counter: candidate.saturating_add(1),
                });
            }
        }

        tracing::debug!(look_ahead = config.look_ahead, "hotp code rejected");
        Ok(HotpVerification::Rejected)
    }

    /// Rejects codes with the wrong shape before any comparison.
    ///
    /// Depends only on the submitted string and the digit count, so the
    /// early return leaks nothing secret-dependent.
    fn check_code_shape(submitted: &str, digits: u8) -> AuthResult<()> {
        if submitted.len() != usize::from(digits) {
            return Err(AuthError::MalformedInput(format!(
                "expected {digits} digits, got {} characters",
                submitted.len()
            )));
        }
        if !submitted.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AuthError::MalformedInput(
                "code must contain only digits".to_string(),
            ));
        }
        Ok(())
    }

    fn compute_hmac(secret: &[u8], counter: u64, algorithm: OtpHashAlgorithm) -> Vec<u8> {
        let counter_bytes = counter.to_be_bytes();

        match algorithm {
            OtpHashAlgorithm::Sha1 => hmac_sha1(secret, &counter_bytes),
            OtpHashAlgorithm::Sha256 => hmac_sha256(secret, &counter_bytes),
            OtpHashAlgorithm::Sha512 => hmac_sha512(secret, &counter_bytes),
        }
    }

    /// Dynamic truncation per RFC 4226 §5.3.
    fn truncate(hmac: &[u8], digits: u8) -> u32 {
        let offset = (hmac.last().copied().unwrap_or(0) & 0x0f) as usize;
        let code = u32::from_be_bytes([
            hmac.get(offset).copied().unwrap_or(0) & 0x7f,
            hmac.get(offset + 1).copied().unwrap_or(0),
            hmac.get(offset + 2).copied().unwrap_or(0),
            hmac.get(offset + 3).copied().unwrap_or(0),
        ]);
        code % 10_u32.pow(u32::from(digits))
    }
}
