//! API client error types.

use thiserror::Error;

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors that can occur when talking to the JobLink backend.
///
/// HTTP failures keep the backend's error payload so consumers can
/// surface the backend's own message to the user.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Request failed ({0}): {1}")]
    RequestFailed(u16, String),

    #[error("Server error ({0}): {1}")]
    ServerError(u16, String),

    #[error("Credential storage error: {0}")]
    Credential(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ApiError {
    /// Classify a non-2xx response by its status code.
    pub fn from_http_status(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        match status {
            401 => ApiError::Unauthorized(body),
            403 => ApiError::Forbidden(body),
            404 => ApiError::NotFound(body),
            400..=499 => ApiError::RequestFailed(status, body),
            _ => ApiError::ServerError(status, body),
        }
    }

    /// HTTP status the error was classified from, if any.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized(_) => Some(401),
            ApiError::Forbidden(_) => Some(403),
            ApiError::NotFound(_) => Some(404),
            ApiError::RequestFailed(status, _) | ApiError::ServerError(status, _) => Some(*status),
            ApiError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True when the backend rejected the presented credential.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }
}
