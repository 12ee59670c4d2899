//! Job applications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::job::Job;
use crate::profile::JobSeekerProfile;
use crate::user::User;

/// Unique identifier for an application.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(pub String);

impl ApplicationId {
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Review state of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    UnderReview,
    Shortlisted,
    Rejected,
    Hired,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::UnderReview => "under_review",
            ApplicationStatus::Shortlisted => "shortlisted",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Hired => "hired",
        }
    }

    /// Whether the review has reached a final outcome.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ApplicationStatus::Rejected | ApplicationStatus::Hired)
    }
}

/// An application a seeker filed against a posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobApplication {
    pub id: ApplicationId,
    pub job: Job,
    pub applicant: User,
    pub job_seeker_profile: JobSeekerProfile,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,

    pub status: ApplicationStatus,

    pub applied_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<DateTime<Utc>>,

    /// Reviewer notes, visible to the poster only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Payload for applying to a posting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplicationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
}

/// Payload for a poster moving an application through review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationStatusUpdate {
    pub status: ApplicationStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&ApplicationStatus::UnderReview).unwrap(),
            "\"under_review\""
        );
        let parsed: ApplicationStatus = serde_json::from_str("\"shortlisted\"").unwrap();
        assert_eq!(parsed, ApplicationStatus::Shortlisted);
    }

    #[test]
    fn test_status_is_terminal() {
        assert!(ApplicationStatus::Hired.is_terminal());
        assert!(ApplicationStatus::Rejected.is_terminal());
        assert!(!ApplicationStatus::Pending.is_terminal());
        assert!(!ApplicationStatus::UnderReview.is_terminal());
    }

    #[test]
    fn test_empty_application_request_serializes_to_empty_object() {
        let request = ApplicationRequest::default();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }
}
