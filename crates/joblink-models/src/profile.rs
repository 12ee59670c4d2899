//! Role-specific user profiles.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::job::ExperienceLevel;
use crate::skill::{ProficiencyLevel, Skill};
use crate::user::User;

/// Unique identifier for a profile.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(pub String);

impl ProfileId {
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A skill a seeker claims, with self-assessed proficiency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSeekerSkill {
    pub id: String,
    pub skill: Skill,
    pub proficiency_level: ProficiencyLevel,
    pub years_of_experience: u32,
}

/// Profile of a user looking for work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSeekerProfile {
    pub id: ProfileId,
    pub user: User,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    pub experience_level: ExperienceLevel,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pincode: Option<String>,

    /// Currently open to offers
    pub availability: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_salary_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_salary_max: Option<f64>,

    #[serde(default)]
    pub skills: Vec<JobSeekerSkill>,
}

/// Profile of a user posting jobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosterProfile {
    pub id: ProfileId,
    pub user: User,

    pub company_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pincode: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,

    pub is_company_verified: bool,
}

/// Either profile kind, as returned by role-agnostic endpoints.
///
/// Poster profiles are tried first: `company_name` is required there and
/// never present on seeker profiles, so the untagged match is unambiguous.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Profile {
    Poster(JobPosterProfile),
    Seeker(JobSeekerProfile),
}

impl Profile {
    /// The user the profile belongs to.
    pub fn user(&self) -> &User {
        match self {
            Profile::Poster(p) => &p.user,
            Profile::Seeker(p) => &p.user,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeker_json() -> serde_json::Value {
        serde_json::json!({
            "id": "p-1",
            "user": {
                "id": "u-1",
                "email": "mina@example.com",
                "first_name": "Mina",
                "last_name": "Patel",
                "role": "job_seeker",
                "is_verified": true,
                "created_at": "2024-03-01T10:00:00Z"
            },
            "experience_level": "mid",
            "availability": true,
            "skills": []
        })
    }

    #[test]
    fn test_seeker_profile_deserializes() {
        let profile: JobSeekerProfile = serde_json::from_value(seeker_json()).unwrap();
        assert_eq!(profile.experience_level, ExperienceLevel::Mid);
        assert!(profile.availability);
        assert!(profile.skills.is_empty());
    }

    #[test]
    fn test_untagged_profile_picks_seeker() {
        let profile: Profile = serde_json::from_value(seeker_json()).unwrap();
        assert!(matches!(profile, Profile::Seeker(_)));
        assert_eq!(profile.user().id.as_str(), "u-1");
    }
}
