//! Job posting endpoints.

use joblink_models::{
    ApplicationRequest, Job, JobApplication, JobFilters, JobId, JobUpdate, NewJob,
    PaginatedResponse,
};

use crate::client::ApiClient;
use crate::error::ApiResult;

impl ApiClient {
    /// List postings, optionally narrowed by filters.
    ///
    /// Only filter fields with a defined, non-empty value are serialized
    /// into the query string.
    pub async fn list_jobs(
        &self,
        filters: Option<&JobFilters>,
    ) -> ApiResult<PaginatedResponse<Job>> {
        match filters {
            Some(filters) if !filters.is_empty() => {
                self.get_json_query("/jobs/", &filters.to_query()).await
            }
            _ => self.get_json("/jobs/").await,
        }
    }

    /// Fetch a single posting.
    pub async fn get_job(&self, id: &JobId) -> ApiResult<Job> {
        self.get_json(&format!("/jobs/{}/", id)).await
    }

    /// Create a posting.
    pub async fn create_job(&self, job: &NewJob) -> ApiResult<Job> {
        self.post_json("/jobs/", job).await
    }

    /// Replace a posting's mutable fields.
    pub async fn update_job(&self, id: &JobId, update: &JobUpdate) -> ApiResult<Job> {
        self.put_json(&format!("/jobs/{}/", id), update).await
    }

    /// Delete a posting.
    pub async fn delete_job(&self, id: &JobId) -> ApiResult<()> {
        self.delete_resource(&format!("/jobs/{}/", id)).await
    }

    /// Apply to a posting as the authenticated seeker.
    pub async fn apply_to_job(
        &self,
        id: &JobId,
        application: &ApplicationRequest,
    ) -> ApiResult<JobApplication> {
        self.post_json(&format!("/jobs/{}/apply/", id), application)
            .await
    }

    /// List applications filed against a posting (poster only).
    pub async fn job_applications(&self, id: &JobId) -> ApiResult<Vec<JobApplication>> {
        self.get_json(&format!("/jobs/{}/applications/", id)).await
    }
}
