//! API Error Types
//!
//! Error taxonomy for calls against the remote backend.

use std::fmt;

/// Common result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Failure modes of a backend call
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// 401 — credential rejected; the client layer has already cleared the session
    Unauthorized,
    /// 409 — the resource already exists
    Conflict(String),
    /// 422 — request shape rejected by the server
    Validation(String),
    /// Any other non-2xx response
    Server(u16),
    /// Request sent but no response received
    Network(String),
    /// 2xx response whose body failed to decode
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthorized => write!(f, "Not authorized"),
            ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            ApiError::Validation(msg) => write!(f, "Invalid request: {}", msg),
            ApiError::Server(status) => write!(f, "Server error ({})", status),
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Decode(msg) => write!(f, "Malformed response: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}
