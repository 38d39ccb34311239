//! Token claims for bearer authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default access token lifetime in minutes
pub const ACCESS_TOKEN_EXPIRY_MINUTES: i64 = 30;

/// Token type reported to clients
pub const TOKEN_TYPE: &str = "bearer";

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (the user's email)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// JWT ID
    pub jti: String,
}

impl Claims {
    /// Creates claims for `email` that expire after `expires_in`
    pub fn new(email: &str, expires_in: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: email.to_string(),
            iat: now.timestamp(),
            exp: (now + expires_in).timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
