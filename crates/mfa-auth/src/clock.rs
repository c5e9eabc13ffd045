//! Time-step counter derivation.
//!
//! The engine never reads the wall clock directly; it consumes a [`Clock`]
//! so verification is deterministic under test. The counter itself is a
//! pure function of an instant and the step duration.

use chrono::{DateTime, Utc};

use crate::error::{AuthError, AuthResult};

/// Source of "now" for the verification engine.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock [`Clock`] for production use.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A [`Clock`] frozen at a fixed instant, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    /// Creates a clock frozen at the given instant.
    #[must_use]
    pub const fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    /// Creates a clock frozen at the given Unix time in seconds.
    ///
    /// Out-of-range values clamp to the Unix epoch.
    #[must_use]
    pub fn from_unix(seconds: i64) -> Self {
        let instant = DateTime::from_timestamp(seconds, 0).unwrap_or(DateTime::UNIX_EPOCH);
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}

/// Derives the moving time-step counter for an instant.
///
/// `floor(epoch_seconds / step_seconds)`, per RFC 6238 §4.2 with T0 = 0.
/// Instants before the Unix epoch clamp to counter 0.
///
/// # Errors
///
/// Returns [`AuthError::InvalidConfiguration`] if `step_seconds` is zero.
pub fn counter_at(time: DateTime<Utc>, step_seconds: u32) -> AuthResult<u64> {
    if step_seconds == 0 {
        return Err(AuthError::InvalidConfiguration(
            "time step must be positive".to_string(),
        ));
    }

    let epoch_seconds = u64::try_from(time.timestamp()).unwrap_or(0);
    Ok(epoch_seconds / u64::from(step_seconds))
}
