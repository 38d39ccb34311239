//! # Infrastructure Layer
//!
//! MySQL implementations of the repository traits defined in `jb_core`:
//!
//! - **Connection pool**: `DatabasePool`, built from `DatabaseConfig`, with
//!   schema migrations and a health check
//! - **Repositories**: sqlx-backed record, user, listing, inbox and travel
//!   repositories, assembled into `jb_core::repositories::Repositories`

use thiserror::Error;

pub mod database;

pub use database::{mysql_repositories, DatabasePool};

/// Errors raised while setting up infrastructure
#[derive(Error, Debug)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = InfrastructureError::Config("DATABASE_URL is empty".to_string());
        assert_eq!(err.to_string(), "Configuration error: DATABASE_URL is empty");
    }
}
