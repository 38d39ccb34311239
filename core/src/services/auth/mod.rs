//! Authentication service module
//!
//! Email + phone login and bearer token resolution.

mod service;


pub use service::AuthService;
