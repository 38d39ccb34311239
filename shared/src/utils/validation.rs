//! Common validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$").expect("valid regex")
});

/// Check if a string is not empty
pub fn not_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Check if a string length (in characters) is within bounds
pub fn length_between(value: &str, min: usize, max: usize) -> bool {
    let len = value.chars().count();
    len >= min && len <= max
}

/// Check if an email address is well formed
pub fn is_valid_email(email: &str) -> bool {
    email.len() <= 50 && EMAIL_REGEX.is_match(email)
}

/// Check if a national identifier has the expected shape (exactly ten digits)
pub fn is_valid_national_code(code: &str) -> bool {
    code.len() == 10 && code.chars().all(|c| c.is_ascii_digit())
}

/// Check if a gender marker is a single character
pub fn is_valid_gender(gender: &str) -> bool {
    gender.chars().count() == 1
}
