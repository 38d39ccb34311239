//! Configuration module with business-specific sub-modules
//!
//! - `auth` - bearer token signing configuration
//! - `database` - database connection and pool configuration
//! - `environment` - environment detection
//! - `server` - HTTP server and CORS configuration

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};

pub use auth::{AuthConfig, JwtConfig};
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use server::{CorsConfig, ServerConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is read first when present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(),
            cors: CorsConfig::from_env(),
        }
    }

    /// Check the configuration for settings that must not reach production.
    ///
    /// Returns a description of every problem found.
    pub fn production_issues(&self) -> Vec<String> {
        let mut issues = Vec::new();
        if !self.environment.is_production() {
            return issues;
        }
        if self.auth.jwt.is_using_default_secret() {
            issues.push("JWT_SECRET is unset; refusing to sign tokens with the default secret".to_string());
        }
        if self.cors.allowed_origins.is_empty() {
            issues.push("ALLOWED_ORIGINS is empty".to_string());
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_config_has_no_issues() {
        let config = AppConfig::default();
        assert!(config.environment.is_development());
        assert!(config.production_issues().is_empty());
    }

    #[test]
    fn test_production_with_default_secret_is_rejected() {
        let config = AppConfig {
            environment: Environment::Production,
            ..Default::default()
        };

        let issues = config.production_issues();
        assert_eq!(issues.len(), 2);
        assert!(issues[0].contains("JWT_SECRET"));
    }
}
