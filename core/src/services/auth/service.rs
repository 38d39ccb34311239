//! Main authentication service implementation

use std::sync::Arc;

use jb_shared::phone::mask_phone_number;

use crate::domain::entities::User;
use crate::domain::value_objects::LoginOutcome;
use crate::errors::{AuthError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

/// Login and bearer-token resolution
pub struct AuthService {
    /// User repository for credential lookups
    user_repository: Arc<dyn UserRepository>,
    /// Token service for JWT management
    token_service: Arc<TokenService>,
}

impl AuthService {
    pub fn new(user_repository: Arc<dyn UserRepository>, token_service: Arc<TokenService>) -> Self {
        Self {
            user_repository,
            token_service,
        }
    }

    /// Logs a user in with their email and phone.
    ///
    /// # Returns
    ///
    /// * `Ok(LoginOutcome)` - The user and a freshly issued access token
    /// * `Err(AuthError::AuthenticationFailed)` - No user has this email and phone
    pub async fn login(&self, email: &str, phone: &str) -> DomainResult<LoginOutcome> {
        let user = match self
            .user_repository
            .find_by_credentials(email, phone)
            .await?
        {
            Some(user) => user,
            None => {
                tracing::warn!(
                    email = email,
                    phone = %mask_phone_number(phone),
                    event = "login_failed",
                    "Login rejected: no user matches the credentials"
                );
                return Err(AuthError::AuthenticationFailed.into());
            }
        };

        let token = self.token_service.issue(&user.email)?;

        tracing::info!(
            user_id = user.user_id,
            event = "login_succeeded",
            "Issued access token"
        );

        Ok(LoginOutcome { user, token })
    }

    /// Resolves a bearer token to the user it was issued for.
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The token is valid and its subject exists
    /// * `Err(TokenError)` - The token is malformed, forged or expired
    /// * `Err(AuthError::UserNotFound)` - The subject no longer exists
    pub async fn authenticate(&self, token: &str) -> DomainResult<User> {
        let claims = self.token_service.verify(token).map_err(|e| {
            tracing::warn!(error = %e, event = "token_rejected", "Bearer token rejected");
            e
        })?;

        match self.user_repository.find_by_email(&claims.sub).await? {
            Some(user) => {
                tracing::debug!(user_id = user.user_id, "Resolved bearer token");
                Ok(user)
            }
            None => {
                tracing::warn!(
                    subject = %claims.sub,
                    event = "token_subject_missing",
                    "Token subject does not exist"
                );
                Err(AuthError::UserNotFound.into())
            }
        }
    }
}
