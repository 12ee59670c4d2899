//! Typed HTTP client for the JobLink backend.
//!
//! This crate provides:
//! - [`ApiClient`], a thin typed gateway over the platform's REST API
//! - Bearer credential storage ([`CredentialStore`] and implementations)
//! - Endpoint groups for auth, jobs, the catalog and applications
//! - An error taxonomy keeping the backend's payload and status
//!
//! The gateway never retries and performs no side effects on failure; in
//! particular it never evicts the stored credential. That policy belongs
//! to the session layer.

pub mod client;
pub mod config;
pub mod credentials;
pub mod error;

mod applications;
mod auth;
mod catalog;
mod jobs;


pub use client::ApiClient;
pub use config::ApiConfig;
pub use credentials::{CredentialStore, FileCredentialStore, MemoryCredentialStore};
pub use error::{ApiError, ApiResult};
