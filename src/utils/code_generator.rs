//! Short code generation and validation utilities.
//!
//! Codes are drawn from a fixed 62-character alphanumeric alphabet with a
//! length between 6 and 8, so the code space size and collision probability
//! are well-defined.

use crate::error::AppError;
use rand::Rng;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Alphabet for generated codes: `[A-Za-z0-9]`.
const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Minimum code length, inclusive.
pub const MIN_CODE_LENGTH: usize = 6;

/// Maximum code length, inclusive.
pub const MAX_CODE_LENGTH: usize = 8;

/// Compiled pattern for caller-supplied codes.
static CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{6,8}$").unwrap());

/// Generates a random short code.
///
/// The length is drawn uniformly from 6..=8 and each character is drawn
/// uniformly from the alphanumeric alphabet. Even at the minimum length the
/// code space holds 62^6 (~5.7e10) values, so collisions against existing
/// links are rare; the allocator still resolves them with a bounded retry
/// loop against the store's conditional insert.
pub fn generate_code() -> String {
    let mut rng = rand::rng();
    let length = rng.random_range(MIN_CODE_LENGTH..=MAX_CODE_LENGTH);

    (0..length)
        .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}

/// Validates a caller-supplied short code.
///
/// # Rules
///
/// - Length: 6-8 characters
/// - Allowed characters: ASCII letters and digits
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the code does not match the pattern.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if !CODE_REGEX.is_match(code) {
        return Err(AppError::bad_request(
            "Code must match [A-Za-z0-9]{6,8}",
            json!({ "code": code }),
        ));
    }

    Ok(())
}
