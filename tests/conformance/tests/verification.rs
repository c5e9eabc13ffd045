//! Verification-window and input-validation semantics.

use chrono::{DateTime, Duration, Utc};
use mfa_auth::{AuthError, Clock, FixedClock, OtpVerifier, TotpConfig, Verification};
use mfa_model::TotpSecret;

fn secret() -> TotpSecret {
    TotpSecret::new(b"12345678901234567890".to_vec())
}

fn now() -> DateTime<Utc> {
    DateTime::from_timestamp(1_111_111_111, 0).unwrap()
}

fn code_at(config: &TotpConfig, at: DateTime<Utc>) -> String {
    OtpVerifier::generate_totp(&secret(), config, at).unwrap()
}

#[test]
fn window_zero_accepts_only_the_exact_counter() {
    let config = TotpConfig::new().window(0);
    let step = Duration::seconds(i64::from(config.period_seconds));

    let current = code_at(&config, now());
    assert!(OtpVerifier::verify_totp_at(&secret(), &current, &config, now())
        .unwrap()
        .is_accepted());

    for at in [now() - step, now() + step] {
        let skewed = code_at(&config, at);
        assert_eq!(
            OtpVerifier::verify_totp_at(&secret(), &skewed, &config, now()).unwrap(),
            Verification::Rejected
        );
    }
}

#[test]
fn window_one_tolerates_one_step_each_way() {
    let config = TotpConfig::new().window(1);
    let step = Duration::seconds(i64::from(config.period_seconds));

    for at in [now() - step, now(), now() + step] {
        let code = code_at(&config, at);
        assert!(
            OtpVerifier::verify_totp_at(&secret(), &code, &config, now())
                .unwrap()
                .is_accepted(),
            "offset {}s",
            (at - now()).num_seconds()
        );
    }

    let stale = code_at(&config, now() - step * 2);
    assert_eq!(
        OtpVerifier::verify_totp_at(&secret(), &stale, &config, now()).unwrap(),
        Verification::Rejected
    );
}

#[test]
fn accepted_counter_reflects_the_matched_step() {
    let config = TotpConfig::new().window(1);
    let step = Duration::seconds(30);
    let base_counter = 1_111_111_111 / 30;

    let past = code_at(&config, now() - step);
    let result = OtpVerifier::verify_totp_at(&secret(), &past, &config, now()).unwrap();
    assert_eq!(result.matched_counter(), Some(base_counter - 1));

    let future = code_at(&config, now() + step);
    let result = OtpVerifier::verify_totp_at(&secret(), &future, &config, now()).unwrap();
    assert_eq!(result.matched_counter(), Some(base_counter + 1));
}

#[test]
fn engine_is_stateless_so_replay_is_the_callers_job() {
    let config = TotpConfig::new();
    let code = code_at(&config, now());

    // The same code verifies twice; callers must persist the accepted
    // counter and reject resubmissions at or below it.
    for _ in 0..2 {
        let result = OtpVerifier::verify_totp_at(&secret(), &code, &config, now()).unwrap();
        assert!(result.is_accepted());
    }
}

#[test]
fn malformed_codes_fail_before_verification_for_all_digit_widths() {
    for digits in 6..=8u8 {
        let config = TotpConfig::new().digits(digits);

        let wrong_length = "1".repeat(usize::from(digits) + 1);
        let err =
            OtpVerifier::verify_totp_at(&secret(), &wrong_length, &config, now()).unwrap_err();
        assert!(matches!(err, AuthError::MalformedInput(_)), "digits {digits}");

        let non_digit = format!("{}x", "1".repeat(usize::from(digits) - 1));
        let err =
            OtpVerifier::verify_totp_at(&secret(), &non_digit, &config, now()).unwrap_err();
        assert!(matches!(err, AuthError::MalformedInput(_)), "digits {digits}");
    }
}

#[test]
fn injected_clock_drives_verification() {
    let config = TotpConfig::new().window(0);
    let clock = FixedClock::from_unix(1_111_111_111);

    let code = code_at(&config, clock.now());
    let result = OtpVerifier::verify_totp(&secret(), &code, &config, &clock).unwrap();
    assert!(result.is_accepted());

    // A clock two steps later no longer accepts the same code.
    let later = FixedClock::from_unix(1_111_111_111 + 60);
    let result = OtpVerifier::verify_totp(&secret(), &code, &config, &later).unwrap();
    assert_eq!(result, Verification::Rejected);
}
