//! Core business logic for the Jabama rental marketplace
//!
//! Entities, domain errors, repository traits (with in-memory
//! implementations) and the services the HTTP layer calls into.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

pub use errors::{DomainError, DomainResult};
