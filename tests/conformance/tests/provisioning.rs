//! Provisioning URI round-trips.
//!
//! An authenticator app must be able to recover the exact secret bytes
//! and parameters from the URI we emit, so these tests parse the URI
//! back apart instead of asserting on string fragments alone.

use std::collections::HashMap;

use mfa_auth::{build_uri, Enrollment, TotpConfig};
use mfa_model::{OtpHashAlgorithm, ProvisioningRecord, TotpSecret};
use uuid::Uuid;

fn split_uri(uri: &str) -> (String, HashMap<String, String>) {
    let rest = uri.strip_prefix("otpauth://totp/").expect("otpauth scheme");
    let (label, query) = rest.split_once('?').expect("query string");

    let params = query
        .split('&')
        .map(|pair| {
            let (k, v) = pair.split_once('=').expect("key=value");
            (k.to_string(), v.to_string())
        })
        .collect();
    (label.to_string(), params)
}

#[test]
fn secret_survives_the_uri_round_trip() {
    let secret_bytes = b"12345678901234567890".to_vec();
    let record = ProvisioningRecord {
        issuer: "ExampleCorp".to_string(),
        account_label: "user@example.com".to_string(),
        secret: TotpSecret::new(secret_bytes.clone()),
        algorithm: OtpHashAlgorithm::Sha1,
        digits: 6,
        period_seconds: 30,
    };

    let uri = build_uri(&record).unwrap();
    let (_, params) = split_uri(&uri);

    let decoded = data_encoding::BASE32_NOPAD
        .decode(params["secret"].as_bytes())
        .unwrap();
    assert_eq!(decoded, secret_bytes);
}

#[test]
fn label_and_issuer_decode_back_to_their_originals() {
    let record = ProvisioningRecord {
        issuer: "Example Corp".to_string(),
        account_label: "user name@example.com".to_string(),
        secret: TotpSecret::new(b"12345678901234567890".to_vec()),
        algorithm: OtpHashAlgorithm::Sha1,
        digits: 6,
        period_seconds: 30,
    };

    let uri = build_uri(&record).unwrap();
    let (label, params) = split_uri(&uri);

    let (issuer_part, label_part) = label.split_once(':').expect("issuer prefix");
    assert_eq!(urlencoding::decode(issuer_part).unwrap(), "Example Corp");
    assert_eq!(
        urlencoding::decode(label_part).unwrap(),
        "user name@example.com"
    );
    assert_eq!(
        urlencoding::decode(&params["issuer"]).unwrap(),
        "Example Corp"
    );
}

#[test]
fn parameters_match_the_record() {
    let record = ProvisioningRecord {
        issuer: "ExampleCorp".to_string(),
        account_label: "user@example.com".to_string(),
        secret: TotpSecret::new(b"12345678901234567890".to_vec()),
        algorithm: OtpHashAlgorithm::Sha512,
        digits: 8,
        period_seconds: 60,
    };

    let (_, params) = split_uri(&build_uri(&record).unwrap());
    assert_eq!(params["algorithm"], "SHA512");
    assert_eq!(params["digits"], "8");
    assert_eq!(params["period"], "60");
}

#[test]
fn enrollment_uri_carries_the_generated_secret() {
    let config = TotpConfig::new();
    let enrollment =
        Enrollment::begin(Uuid::now_v7(), "ExampleCorp", "user@example.com", &config).unwrap();

    let (_, params) = split_uri(&enrollment.provisioning_uri);
    let decoded = data_encoding::BASE32_NOPAD
        .decode(params["secret"].as_bytes())
        .unwrap();
    assert_eq!(decoded, enrollment.credential.secret.as_bytes());
}
