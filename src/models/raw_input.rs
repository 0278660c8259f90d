//! Raw, unvalidated input values.
//!
//! A presentation layer hands values to the calculator exactly as the user
//! typed them. [`RawInput`] accepts both JSON numbers and strings, and
//! [`parse_leading_int`] reads them the way a numeric form field is read.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A candidate value for a rate, a day count, or an hour.
///
/// # Example
///
/// ```
/// use wage_calculator::models::RawInput;
///
/// assert_eq!(RawInput::from("1200").parse_int(), Some(1200));
/// assert_eq!(RawInput::from(12.9).parse_int(), Some(12));
/// assert_eq!(RawInput::from("").parse_int(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawInput {
    /// A whole number.
    Integer(i64),
    /// A number with a fractional part.
    Decimal(f64),
    /// Free text, possibly empty.
    Text(String),
}

impl RawInput {
    /// Parses the value as a base-10 integer.
    ///
    /// Returns `None` when no integer can be read, which callers treat as
    /// "not a number". Fractional numbers are truncated toward zero.
    pub fn parse_int(&self) -> Option<i64> {
        match self {
            RawInput::Integer(value) => Some(*value),
            RawInput::Decimal(value) if value.is_finite() => Some(value.trunc() as i64),
            RawInput::Decimal(_) => None,
            RawInput::Text(text) => parse_leading_int(text),
        }
    }
}

impl Default for RawInput {
    fn default() -> Self {
        RawInput::Text(String::new())
    }
}

impl fmt::Display for RawInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawInput::Integer(value) => write!(f, "{}", value),
            RawInput::Decimal(value) => write!(f, "{}", value),
            RawInput::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for RawInput {
    fn from(value: &str) -> Self {
        RawInput::Text(value.to_string())
    }
}

impl From<String> for RawInput {
    fn from(value: String) -> Self {
        RawInput::Text(value)
    }
}

impl From<i64> for RawInput {
    fn from(value: i64) -> Self {
        RawInput::Integer(value)
    }
}

impl From<f64> for RawInput {
    fn from(value: f64) -> Self {
        RawInput::Decimal(value)
    }
}

/// Reads the leading base-10 integer of `text`.
///
/// Leading whitespace is skipped, an optional `+` or `-` sign is accepted,
/// and the longest run of ASCII digits that follows is the value. Anything
/// after the digits is ignored. Returns `None` if there are no digits.
/// Values beyond the range of `i64` saturate.
///
/// # Example
///
/// ```
/// use wage_calculator::models::parse_leading_int;
///
/// assert_eq!(parse_leading_int("  42"), Some(42));
/// assert_eq!(parse_leading_int("-7"), Some(-7));
/// assert_eq!(parse_leading_int("12abc"), Some(12));
/// assert_eq!(parse_leading_int("3.7"), Some(3));
/// assert_eq!(parse_leading_int("abc"), None);
/// ```
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for byte in digits.bytes().take_while(u8::is_ascii_digit) {
        seen_digit = true;
        let digit = i64::from(byte - b'0');
        value = value.saturating_mul(10);
        value = if negative {
            value.saturating_sub(digit)
        } else {
            value.saturating_add(digit)
        };
    }

    seen_digit.then_some(value)
}
