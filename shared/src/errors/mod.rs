//! Shared error response body

use serde::{Deserialize, Serialize};

/// Error body returned by every endpoint.
///
/// The HTTP status carries the error class; `detail` is a human readable
/// message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
