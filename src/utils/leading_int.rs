//! Permissive integer parsing for form quantities.
//!
//! Quantity fields are free text. Browsers and hand-written clients send
//! values like `"2"`, `" 3"`, `"4 pcs"` or `"1.5"`; the leading integer is
//! taken and everything after it is ignored.

/// Parses the leading integer of `input`.
///
/// # Rules
///
/// 1. Leading whitespace is skipped
/// 2. An optional `+` or `-` sign is accepted
/// 3. The longest run of ASCII digits that follows is the value
/// 4. Anything after that run is ignored
///
/// Returns `None` when no digit follows the optional sign. A digit run too
/// long for an `i64` saturates to `i64::MAX` (or `i64::MIN` when negative),
/// so an oversized positive quantity stays positive.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(parse_leading_int("2"), Some(2));
/// assert_eq!(parse_leading_int("  7 dosas"), Some(7));
/// assert_eq!(parse_leading_int("3.9"), Some(3));
/// assert_eq!(parse_leading_int("-1"), Some(-1));
/// assert_eq!(parse_leading_int("abc"), None);
/// ```
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();

    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let saturated = if negative { i64::MIN } else { i64::MAX };

    let mut value: i64 = 0;
    for digit in rest[..digits_len].bytes() {
        let d = i64::from(digit - b'0');
        let next = value.checked_mul(10).and_then(|v| {
            if negative {
                v.checked_sub(d)
            } else {
                v.checked_add(d)
            }
        });
        match next {
            Some(v) => value = v,
            None => return Some(saturated),
        }
    }

    Some(value)
}
