//! RFC 6238 Appendix B TOTP test vectors.
//!
//! The appendix uses 8-digit codes, a 30-second step, and a per-algorithm
//! secret sized to the HMAC block: the ASCII seed `12345678901234567890`
//! repeated to 20, 32, and 64 bytes for SHA-1, SHA-256, and SHA-512.

use chrono::DateTime;
use mfa_auth::{OtpVerifier, TotpConfig};
use mfa_model::{OtpHashAlgorithm, TotpSecret};

fn seed(len: usize) -> TotpSecret {
    let bytes: Vec<u8> = b"1234567890".iter().copied().cycle().take(len).collect();
    TotpSecret::new(bytes)
}

fn check(algorithm: OtpHashAlgorithm, secret_len: usize, cases: &[(i64, &str)]) {
    let secret = seed(secret_len);
    let config = TotpConfig::new().digits(8).algorithm(algorithm);

    for &(time, want) in cases {
        let now = DateTime::from_timestamp(time, 0).unwrap();
        let code = OtpVerifier::generate_totp(&secret, &config, now).unwrap();
        assert_eq!(code, want, "{algorithm:?} at unix time {time}");
    }
}

#[test]
fn appendix_b_sha1() {
    check(
        OtpHashAlgorithm::Sha1,
        20,
        &[
            (59, "94287082"),
            (1_111_111_109, "07081804"),
            (1_111_111_111, "14050471"),
            (1_234_567_890, "89005924"),
            (2_000_000_000, "69279037"),
            (20_000_000_000, "65353130"),
        ],
    );
}

#[test]
fn appendix_b_sha256() {
    check(
        OtpHashAlgorithm::Sha256,
        32,
        &[
            (59, "46119246"),
            (1_111_111_109, "68084774"),
            (1_111_111_111, "67062674"),
            (1_234_567_890, "91819424"),
            (2_000_000_000, "90698825"),
            (20_000_000_000, "77737706"),
        ],
    );
}

#[test]
fn appendix_b_sha512() {
    check(
        OtpHashAlgorithm::Sha512,
        64,
        &[
            (59, "90693936"),
            (1_111_111_109, "25091201"),
            (1_111_111_111, "99943326"),
            (1_234_567_890, "93441116"),
            (2_000_000_000, "38618901"),
            (20_000_000_000, "47863826"),
        ],
    );
}

#[test]
fn six_digit_codes_are_the_vector_suffix() {
    // Reducing modulo 10^6 instead of 10^8 drops the two leading digits.
    let secret = seed(20);
    let now = DateTime::from_timestamp(59, 0).unwrap();

    let config = TotpConfig::new().digits(6);
    let code = OtpVerifier::generate_totp(&secret, &config, now).unwrap();
    assert_eq!(code, "287082");
}
