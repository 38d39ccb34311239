//! Bearer token configuration

use serde::{Deserialize, Serialize};

const DEFAULT_SECRET: &str = "development-secret-please-change-in-production";

/// JWT signing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Shared secret used to sign and verify tokens
    pub secret: String,

    /// Access token lifetime in minutes
    pub expire_minutes: i64,

    /// Algorithm for JWT signing (default: HS256)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SECRET),
            expire_minutes: 30,
            algorithm: default_algorithm(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set the access token lifetime in minutes
    pub fn with_expire_minutes(mut self, minutes: i64) -> Self {
        self.expire_minutes = minutes;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = JwtConfig::default();
        let secret = std::env::var("JWT_SECRET").unwrap_or(defaults.secret);
        let expire_minutes = std::env::var("JWT_EXPIRE_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|minutes: &i64| *minutes > 0)
            .unwrap_or(defaults.expire_minutes);

        Self {
            jwt: JwtConfig {
                secret,
                expire_minutes,
                algorithm: default_algorithm(),
            },
        }
    }
}

fn default_algorithm() -> String {
    String::from("HS256")
}
