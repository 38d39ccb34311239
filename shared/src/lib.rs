//! Shared utilities and common types for the Jabama server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - The JSON error body returned by every endpoint
//! - Utility functions (phone and email validation)

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, AuthConfig, CorsConfig, DatabaseConfig, Environment, JwtConfig, ServerConfig};
pub use errors::ErrorResponse;
pub use utils::{phone, validation};
