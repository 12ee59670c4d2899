//! Application endpoints.

use joblink_models::{
    ApplicationId, ApplicationStatus, ApplicationStatusUpdate, JobApplication,
};

use crate::client::ApiClient;
use crate::error::ApiResult;

impl ApiClient {
    /// List the authenticated seeker's own applications.
    pub async fn my_applications(&self) -> ApiResult<Vec<JobApplication>> {
        self.get_json("/applications/my/").await
    }

    /// Move an application through review (poster only).
    pub async fn update_application_status(
        &self,
        id: &ApplicationId,
        status: ApplicationStatus,
    ) -> ApiResult<JobApplication> {
        self.patch_json(
            &format!("/applications/{}/", id),
            &ApplicationStatusUpdate { status },
        )
        .await
    }
}
