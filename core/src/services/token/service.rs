//! Main token service implementation

use chrono::Duration;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::Claims;
use crate::domain::value_objects::AccessToken;
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Issues and verifies signed bearer tokens
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.validate_exp = true;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Configured access token lifetime
    pub fn expiry(&self) -> Duration {
        Duration::minutes(self.config.access_token_expiry_minutes)
    }

    /// Issues an access token for `email` with the configured lifetime
    pub fn issue(&self, email: &str) -> Result<AccessToken, DomainError> {
        self.issue_with_expiry(email, self.expiry())
    }

    /// Issues an access token for `email` that expires after `expires_in`
    ///
    /// # Returns
    ///
    /// * `Ok(AccessToken)` - The signed token
    /// * `Err(TokenError::MissingClaim)` - `email` is empty
    pub fn issue_with_expiry(
        &self,
        email: &str,
        expires_in: Duration,
    ) -> Result<AccessToken, DomainError> {
        if email.is_empty() {
            return Err(TokenError::MissingClaim {
                claim: "sub".to_string(),
            }
            .into());
        }

        let claims = Claims::new(email, expires_in);
        let token = self.encode_jwt(&claims)?;
        Ok(AccessToken::bearer(token, expires_in.num_seconds()))
    }

    /// Encodes claims into a JWT
    pub(crate) fn encode_jwt(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Verifies a token's signature and expiry and returns its claims
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if valid
    /// * `Err(TokenError)` - Token is invalid, expired, malformed or has no subject
    pub fn verify(&self, token: &str) -> Result<Claims, DomainError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => DomainError::Token(TokenError::TokenExpired),
                ErrorKind::InvalidSignature => DomainError::Token(TokenError::InvalidSignature),
                _ => DomainError::Token(TokenError::InvalidTokenFormat),
            })?;

        if token_data.claims.sub.is_empty() {
            return Err(TokenError::MissingClaim {
                claim: "sub".to_string(),
            }
            .into());
        }

        Ok(token_data.claims)
    }
}
