//! Shared data models for the JobLink platform client.
//!
//! This crate provides Serde-serializable types for:
//! - Users, roles and authentication payloads
//! - Job postings, categories and skills
//! - Applications and their review states
//! - Listing filters and the paginated response envelope
//!
//! All entities mirror the backend's field contracts. The client treats
//! them as read-only snapshots: records are replaced wholesale, never
//! patched field-by-field.

pub mod application;
pub mod category;
pub mod filters;
pub mod job;
pub mod pagination;
pub mod profile;
pub mod skill;
pub mod user;

// Re-export common types
pub use application::{
    ApplicationId, ApplicationRequest, ApplicationStatus, ApplicationStatusUpdate, JobApplication,
};
pub use category::{CategoryId, JobCategory};
pub use filters::JobFilters;
pub use job::{
    ExperienceLevel, Job, JobId, JobSkillRequirement, JobStatus, JobType, JobUpdate, NewJob,
    RequirementLevel, SalaryType,
};
pub use pagination::PaginatedResponse;
pub use profile::{JobPosterProfile, JobSeekerProfile, JobSeekerSkill, Profile, ProfileId};
pub use skill::{ProficiencyLevel, Skill, SkillId};
pub use user::{AuthResponse, LoginData, RegisterData, TokenResponse, User, UserId, UserRole};
