//! Error types for authentication, token handling and input validation

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No user matches the submitted email and phone pair
    #[error("Incorrect email or phone")]
    AuthenticationFailed,

    /// The token is valid but its subject no longer exists
    #[error("User not found")]
    UserNotFound,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Missing claim: {claim}")]
    MissingClaim { claim: String },

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Validation errors for incoming payloads
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field required: {field}")]
    RequiredField { field: String },

    #[error("Invalid format for field: {field}")]
    InvalidFormat { field: String },

    #[error("Value out of range for field: {field} (min: {min}, max: {max})")]
    OutOfRange {
        field: String,
        min: String,
        max: String,
    },

    #[error("Invalid length for field: {field} (expected: {expected}, actual: {actual})")]
    InvalidLength {
        field: String,
        expected: String,
        actual: usize,
    },

    #[error("{start} must be before {end}")]
    InvalidRange { start: String, end: String },

    #[error("Unknown filter: {field}")]
    UnknownFilter { field: String },
}

impl ValidationError {
    /// Shorthand for an `InvalidFormat` error
    pub fn invalid(field: &str) -> Self {
        ValidationError::InvalidFormat {
            field: field.to_string(),
        }
    }

    /// Shorthand for a `RequiredField` error
    pub fn required(field: &str) -> Self {
        ValidationError::RequiredField {
            field: field.to_string(),
        }
    }

    /// Checks that `value` has between `min` and `max` characters
    pub fn check_length(field: &str, value: &str, min: usize, max: usize) -> Result<(), Self> {
        if jb_shared::validation::length_between(value, min, max) {
            return Ok(());
        }
        Err(ValidationError::InvalidLength {
            field: field.to_string(),
            expected: format!("{}..={}", min, max),
            actual: value.chars().count(),
        })
    }
}
