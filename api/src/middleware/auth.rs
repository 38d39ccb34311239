//! Bearer-token authentication for protected endpoints.
//!
//! Handlers that need a caller take a [`CurrentUser`] argument; the
//! extractor reads the `Authorization: Bearer <token>` header, verifies the
//! token and resolves its subject to a stored user. Any failure yields 401.

use actix_web::{dev::Payload, http::header::AUTHORIZATION, web, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;

use jb_core::domain::entities::User;
use jb_core::errors::{DomainError, TokenError};

use crate::app::AppState;
use crate::handlers::ApiError;

/// The authenticated caller
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl std::ops::Deref for CurrentUser {
    type Target = User;

    fn deref(&self) -> &User {
        &self.0
    }
}

impl FromRequest for CurrentUser {
    type Error = ApiError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let token = extract_bearer_token(req);
        let state = req.app_data::<web::Data<AppState>>().cloned();

        Box::pin(async move {
            let state = state.ok_or_else(|| DomainError::Internal {
                message: "application state is not configured".to_string(),
            })?;
            let token = token.ok_or(DomainError::Token(TokenError::InvalidTokenFormat))?;

            let user = state.auth_service.authenticate(&token).await?;
            Ok(CurrentUser(user))
        })
    }
}

/// Extracts the token of a `Bearer` authorization header (scheme is
/// case-insensitive)
fn extract_bearer_token(req: &HttpRequest) -> Option<String> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then(|| token.to_string())
}
