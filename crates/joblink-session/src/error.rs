//! Session error types.

use joblink_client::ApiError;
use thiserror::Error;

/// Result type for session actions.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors surfaced by session actions.
///
/// Failures propagate to the caller for user-facing display; the session
/// store swallows nothing except the best-effort backend logout.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The backend rejected the supplied or stored credentials.
    #[error("authentication rejected: {0}")]
    Rejected(#[source] ApiError),

    /// Any other gateway failure.
    #[error(transparent)]
    Api(ApiError),
}

impl From<ApiError> for SessionError {
    fn from(err: ApiError) -> Self {
        if err.is_unauthorized() {
            SessionError::Rejected(err)
        } else {
            SessionError::Api(err)
        }
    }
}

impl SessionError {
    /// True when the backend rejected the credentials, as opposed to a
    /// transport or server failure.
    pub fn is_auth_rejection(&self) -> bool {
        matches!(self, SessionError::Rejected(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_maps_to_rejection() {
        let err = SessionError::from(ApiError::from_http_status(401, "bad password"));
        assert!(err.is_auth_rejection());
    }

    #[test]
    fn test_server_error_is_not_a_rejection() {
        let err = SessionError::from(ApiError::from_http_status(502, "bad gateway"));
        assert!(!err.is_auth_rejection());
    }
}
