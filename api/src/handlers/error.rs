//! Rendering of domain errors as HTTP responses
//!
//! Every failure leaves the API as `{"detail": "<message>"}` with the
//! status code of its error class. Extractor failures (bad JSON, form,
//! query or path values) go through the same body with 422.

use actix_web::{
    error::{JsonPayloadError, PathError, QueryPayloadError, UrlencodedError},
    http::{header, StatusCode},
    HttpRequest, HttpResponse, ResponseError,
};
use jb_core::errors::{AuthError, DomainError, TokenError};
use jb_shared::ErrorResponse;

const INVALID_CREDENTIALS: &str = "Could not validate credentials";
const INTERNAL_ERROR: &str = "Internal server error";

/// Error returned by every handler
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub DomainError);

impl ApiError {
    /// A request the framework could not decode
    pub fn unprocessable(message: impl Into<String>) -> Self {
        ApiError(DomainError::Validation {
            message: message.into(),
        })
    }

    /// Message placed in the `detail` field
    pub fn detail(&self) -> String {
        match &self.0 {
            DomainError::Validation { message } => message.clone(),
            DomainError::Token(TokenError::TokenGenerationFailed) => INTERNAL_ERROR.to_string(),
            DomainError::Token(_) | DomainError::Auth(AuthError::UserNotFound) => {
                INVALID_CREDENTIALS.to_string()
            }
            DomainError::Internal { .. } | DomainError::Database { .. } => {
                INTERNAL_ERROR.to_string()
            }
            other => other.to_string(),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errors)| {
                let reasons: Vec<String> = errors
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect();
                format!("{}: {}", field, reasons.join(", "))
            })
            .collect();
        fields.sort();
        ApiError::unprocessable(fields.join("; "))
    }
}

impl From<jb_core::errors::ValidationError> for ApiError {
    fn from(error: jb_core::errors::ValidationError) -> Self {
        ApiError(error.into())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match &self.0 {
            DomainError::Validation { .. } | DomainError::ValidationErr(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            DomainError::Conflict { .. } => StatusCode::CONFLICT,
            DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
            DomainError::Forbidden { .. } => StatusCode::FORBIDDEN,
            DomainError::Auth(_) => StatusCode::UNAUTHORIZED,
            DomainError::Token(TokenError::TokenGenerationFailed) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            DomainError::Token(_) => StatusCode::UNAUTHORIZED,
            DomainError::Internal { .. } | DomainError::Database { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("Request failed: {}", self.0);
        } else {
            log::debug!("Request rejected ({}): {}", status.as_u16(), self.0);
        }

        let mut response = HttpResponse::build(status);
        if status == StatusCode::UNAUTHORIZED {
            response.insert_header((header::WWW_AUTHENTICATE, "Bearer"));
        }
        response.json(ErrorResponse::new(self.detail()))
    }
}

pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::unprocessable(err.to_string()).into()
}

pub fn form_error_handler(err: UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::unprocessable(err.to_string()).into()
}

pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::unprocessable(err.to_string()).into()
}

pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::unprocessable(err.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn test_status_codes() {
        let cases = [
            (DomainError::conflict("User already exists"), 409),
            (DomainError::not_found("House"), 404),
            (DomainError::forbidden(), 403),
            (AuthError::AuthenticationFailed.into(), 401),
            (AuthError::UserNotFound.into(), 401),
            (TokenError::TokenExpired.into(), 401),
            (TokenError::TokenGenerationFailed.into(), 500),
            (
                DomainError::Database {
                    message: "connection reset".to_string(),
                },
                500,
            ),
        ];
        for (error, status) in cases {
            assert_eq!(ApiError(error).status_code().as_u16(), status);
        }
    }

    #[test]
    fn test_token_errors_share_one_message() {
        let expired = ApiError(TokenError::TokenExpired.into());
        let unknown = ApiError(AuthError::UserNotFound.into());
        assert_eq!(expired.detail(), unknown.detail());
    }

    #[actix_web::test]
    async fn test_unauthorized_sets_www_authenticate() {
        let response = ApiError(AuthError::AuthenticationFailed.into()).error_response();
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );

        let body = to_bytes(response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["detail"], "Incorrect email or phone");
    }

    #[test]
    fn test_database_details_are_not_leaked() {
        let error = ApiError(DomainError::Database {
            message: "Duplicate entry for key".to_string(),
        });
        assert_eq!(error.detail(), "Internal server error");
    }
}
