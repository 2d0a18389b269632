// src/validate/rules.rs

use once_cell::sync::Lazy;
use regex::Regex;

/// Local part, `@`, then a domain containing at least one dot.
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("invalid email pattern"));

/// Optional leading `+`, then digits with space, dash, dot or parenthesis
/// separators. At least one digit.
static PHONE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9 ().-]*[0-9][0-9 ().-]*$").expect("invalid phone pattern"));

pub fn email_shape_ok(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value)
}

pub fn phone_shape_ok(value: &str) -> bool {
    PHONE_SHAPE.is_match(value)
}
