//! Token service module for JWT management
//!
//! Issues HS256 access tokens whose subject is the user's email and
//! verifies their signature and expiry.

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::TokenService;
