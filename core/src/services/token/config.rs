//! Configuration for the token service

use std::str::FromStr;

use jb_shared::JwtConfig;
use jsonwebtoken::Algorithm;

use crate::domain::entities::token::ACCESS_TOKEN_EXPIRY_MINUTES;
use crate::errors::DomainError;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Access token expiry in minutes
    pub access_token_expiry_minutes: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            algorithm: Algorithm::HS256,
            access_token_expiry_minutes: ACCESS_TOKEN_EXPIRY_MINUTES,
        }
    }
}

impl TokenServiceConfig {
    /// Builds the service configuration from the loaded JWT settings.
    ///
    /// Only the shared-secret (HMAC) algorithms are accepted.
    pub fn from_jwt_config(config: &JwtConfig) -> Result<Self, DomainError> {
        let algorithm = Algorithm::from_str(&config.algorithm).map_err(|_| {
            DomainError::Internal {
                message: format!("unsupported JWT algorithm: {}", config.algorithm),
            }
        })?;
        if !matches!(
            algorithm,
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512
        ) {
            return Err(DomainError::Internal {
                message: format!("JWT algorithm {} needs a key pair", config.algorithm),
            });
        }

        Ok(Self {
            jwt_secret: config.secret.clone(),
            algorithm,
            access_token_expiry_minutes: config.expire_minutes,
        })
    }
}
