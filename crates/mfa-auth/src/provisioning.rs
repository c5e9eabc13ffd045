//! Provisioning URI construction.
//!
//! Renders a [`ProvisioningRecord`] into the `otpauth://totp/...` URI
//! that authenticator apps import, per the Google Authenticator key-URI
//! convention required for third-party compatibility. URI construction
//! is a synchronous pure function; rendering the URI into a QR image is
//! a downstream concern this crate has no dependency on.

use mfa_model::ProvisioningRecord;

use crate::error::{AuthError, AuthResult};

/// Builds the canonical `otpauth://` provisioning URI for a record.
///
/// Produces
/// `otpauth://totp/{issuer}:{label}?secret={base32}&issuer={issuer}&algorithm={ALG}&digits={d}&period={p}`
/// with issuer and account label percent-encoded. When the issuer is
/// empty, both the label prefix and the `issuer` parameter are omitted.
///
/// # Errors
///
/// Returns [`AuthError::InvalidLabel`] if the account label is empty.
pub fn build_uri(record: &ProvisioningRecord) -> AuthResult<String> {
    if record.account_label.is_empty() {
        return Err(AuthError::InvalidLabel);
    }

    let secret = record.secret.to_base32();
    let label = urlencoding::encode(&record.account_label);
    let algorithm = record.algorithm.as_str();
    let digits = record.digits;
    let period = record.period_seconds;

    let uri = if record.issuer.is_empty() {
        format!(
            "otpauth://totp/{label}?secret={secret}&algorithm={algorithm}&digits={digits}&period={period}"
        )
    } else {
        let issuer = urlencoding::encode(&record.issuer);
        format!(
            "otpauth://totp/{issuer}:{label}?secret={secret}&issuer={issuer}&algorithm={algorithm}&digits={digits}&period={period}"
        )
    };

    Ok(uri)
}
