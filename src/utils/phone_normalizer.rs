//! Phone number normalization and format validation.
//!
//! Customer phone numbers arrive as free-form text such as `(555) 123-4567`.
//! They are reduced to their digits and accepted only when exactly ten remain.

use regex::Regex;
use std::sync::LazyLock;

/// Compiled regex for the accepted phone number shape.
static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{10}$").unwrap());

/// Strips every character that is not an ASCII decimal digit.
///
/// No locale awareness: non-ASCII digits (e.g. Arabic-Indic numerals) are
/// removed like any other character.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_phone("(555) 123-4567"), "5551234567");
/// assert_eq!(normalize_phone("+1 555.123.4567"), "15551234567");
/// ```
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Returns true if an already normalized phone number has exactly 10 digits.
pub fn is_valid_phone(normalized: &str) -> bool {
    PHONE_REGEX.is_match(normalized)
}
