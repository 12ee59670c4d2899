//! User identity and authentication payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    /// Create from an existing string.
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role a user holds on the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Looking for work
    JobSeeker,
    /// Posting jobs
    JobPoster,
    /// Platform administrator
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::JobSeeker => "job_seeker",
            UserRole::JobPoster => "job_poster",
            UserRole::Admin => "admin",
        }
    }
}

/// Identity record returned by the backend.
///
/// Users are owned by the backend: the client replaces them wholesale and
/// never patches individual fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID
    pub id: UserId,

    /// Login email
    pub email: String,

    pub first_name: String,
    pub last_name: String,

    /// Role on the platform
    pub role: UserRole,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    /// Whether the email address has been verified
    pub is_verified: bool,

    pub created_at: DateTime<Utc>,
}

impl User {
    /// Display name assembled from first and last name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Credentials supplied to the login endpoint. Write-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginData {
    pub email: String,
    pub password: String,
}

/// Payload for the registration endpoint. Write-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterData {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,

    /// Either `job_seeker` or `job_poster`; `admin` accounts are not
    /// self-registered.
    pub role: UserRole,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    /// Required by the backend when registering as a job poster
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
}

/// Response of the login and register endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Bearer token identifying the new session
    pub token: String,
    /// The authenticated user
    pub user: User,
}

/// Response of the token refresh endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        serde_json::from_value(serde_json::json!({
            "id": "u-1",
            "email": "mina@example.com",
            "first_name": "Mina",
            "last_name": "Patel",
            "role": "job_seeker",
            "is_verified": true,
            "created_at": "2024-03-01T10:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_role_wire_format() {
        assert_eq!(
            serde_json::to_string(&UserRole::JobPoster).unwrap(),
            "\"job_poster\""
        );
        let role: UserRole = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, UserRole::Admin);
    }

    #[test]
    fn test_user_deserializes_without_phone() {
        let user = sample_user();
        assert_eq!(user.id.as_str(), "u-1");
        assert_eq!(user.phone_number, None);
        assert_eq!(user.full_name(), "Mina Patel");
    }

    #[test]
    fn test_register_data_omits_absent_fields() {
        let data = RegisterData {
            email: "mina@example.com".to_string(),
            password: "pw".to_string(),
            first_name: "Mina".to_string(),
            last_name: "Patel".to_string(),
            role: UserRole::JobSeeker,
            phone_number: None,
            company_name: None,
        };
        let json = serde_json::to_value(&data).unwrap();
        assert!(json.get("company_name").is_none());
        assert!(json.get("phone_number").is_none());
    }
}
