//! Constant-time comparison.

/// Compares two byte slices in constant time.
///
/// The comparison touches every byte regardless of where the first
/// difference occurs, so the duration leaks nothing about how close a
/// guessed one-time code is to the expected one. Slices of different
/// lengths compare unequal immediately; length is not secret here.
#[must_use]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}
