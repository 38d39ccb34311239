//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// Iranian mobile number, national format (09xxxxxxxxx)
static IRAN_MOBILE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^09\d{9}$").expect("valid regex"));

// Iranian landline, national format with area code (0xx xxxxxxxx)
static IRAN_LANDLINE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^0[1-8]\d{9}$").expect("valid regex"));

/// Normalize a phone number by removing common formatting characters
pub fn normalize_phone_number(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Check if a phone number is a valid Iranian mobile number
pub fn is_valid_mobile(phone: &str) -> bool {
    IRAN_MOBILE_REGEX.is_match(&normalize_phone_number(phone))
}

/// Check if a phone number is a valid Iranian landline number
pub fn is_valid_landline(phone: &str) -> bool {
    IRAN_LANDLINE_REGEX.is_match(&normalize_phone_number(phone))
}

/// Mask a phone number for logs (e.g., 0912****001)
pub fn mask_phone_number(phone: &str) -> String {
    let normalized = normalize_phone_number(phone);
    if normalized.len() >= 7 {
        format!(
            "{}****{}",
            &normalized[0..4],
            &normalized[normalized.len() - 3..]
        )
    } else {
        "****".to_string()
    }
}
