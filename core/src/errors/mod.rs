//! Domain-specific error types and error handling.

mod types;

pub use types::{AuthError, TokenError, ValidationError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// A unique constraint would be violated
    #[error("{message}")]
    Conflict { message: String },

    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("{message}")]
    Forbidden { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("Database error: {message}")]
    Database { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

impl DomainError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource: resource.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        DomainError::Conflict {
            message: message.into(),
        }
    }

    pub fn forbidden() -> Self {
        DomainError::Forbidden {
            message: "Not authorized to take action".to_string(),
        }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, DomainError::Conflict { .. })
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_resource() {
        assert_eq!(DomainError::not_found("User").to_string(), "User not found");
    }

    #[test]
    fn test_auth_error_is_transparent() {
        let err: DomainError = AuthError::AuthenticationFailed.into();
        assert_eq!(err.to_string(), "Incorrect email or phone");
    }

    #[test]
    fn test_forbidden_message() {
        assert_eq!(
            DomainError::forbidden().to_string(),
            "Not authorized to take action"
        );
    }

    #[test]
    fn test_length_check() {
        assert!(ValidationError::check_length("name", "abc", 1, 5).is_ok());
        let err = ValidationError::check_length("name", "", 1, 5).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidLength { actual: 0, .. }));
    }
}
