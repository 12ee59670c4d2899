//! Category and skill catalog endpoints.

use joblink_models::{JobCategory, Skill};

use crate::client::ApiClient;
use crate::error::ApiResult;

impl ApiClient {
    /// List job categories.
    pub async fn list_categories(&self) -> ApiResult<Vec<JobCategory>> {
        self.get_json("/categories/").await
    }

    /// List the skill catalog.
    pub async fn list_skills(&self) -> ApiResult<Vec<Skill>> {
        self.get_json("/skills/").await
    }
}
