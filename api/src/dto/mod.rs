//! Request and response bodies of the HTTP API

pub mod auth;
pub mod booking;
pub mod listing;
pub mod messaging;
pub mod user;

use validator::Validate;

use crate::handlers::ApiError;

/// Runs the derived validation rules on a request body
pub fn validated<T: Validate>(payload: T) -> Result<T, ApiError> {
    payload.validate()?;
    Ok(payload)
}
