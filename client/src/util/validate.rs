//! Form field validators shared by signup, profile, and prediction forms.
//!
//! Numeric validators read the leading number of the input the way a
//! browser's `parseInt`/`parseFloat` would, so `"42 years"` is an age of 42.
//! Digits are ASCII only; `regex`'s `\d` would also accept other scripts.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::sync::LazyLock;

use regex::Regex;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex should compile"));
static PHONE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").expect("phone regex should compile"));
static LEADING_INT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+").expect("integer regex should compile"));
static LEADING_FLOAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?").expect("float regex should compile"));

/// Default bounds for lab values without a specific range.
pub const HEALTH_PARAMETER_MIN: f64 = 0.0;
pub const HEALTH_PARAMETER_MAX: f64 = 1000.0;

pub fn validate_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Phone numbers: optional `+`, no leading zero, at most 16 digits. Whitespace is ignored.
pub fn validate_phone(phone: &str) -> bool {
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    PHONE.is_match(&compact)
}

/// Leading integer of `raw`, ignoring leading whitespace.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    LEADING_INT.find(raw.trim_start())?.as_str().parse().ok()
}

/// Leading decimal number of `raw`, ignoring leading whitespace.
pub fn parse_leading_float(raw: &str) -> Option<f64> {
    LEADING_FLOAT.find(raw.trim_start())?.as_str().parse().ok()
}

pub fn validate_age(age: &str) -> bool {
    parse_leading_int(age).is_some_and(|n| (0..=150).contains(&n))
}

/// Whether `value` parses to a number inside `min..=max`.
pub fn validate_health_parameter(value: &str, min: f64, max: f64) -> bool {
    parse_leading_float(value).is_some_and(|n| n >= min && n <= max)
}
