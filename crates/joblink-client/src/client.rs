//! JobLink REST API client.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::ApiConfig;
use crate::credentials::CredentialStore;
use crate::error::{ApiError, ApiResult};

/// Typed client for the JobLink backend.
///
/// Wraps a tuned `reqwest::Client` and attaches the stored bearer
/// credential to every outgoing request. The credential is read from the
/// store immediately before each send, never cached here, so an eviction
/// performed elsewhere takes effect on the very next request.
///
/// The client classifies non-2xx responses into [`ApiError`] and does
/// nothing else with them: no retries, no credential eviction.
pub struct ApiClient {
    http: Client,
    config: ApiConfig,
    credentials: Arc<dyn CredentialStore>,
}

impl Clone for ApiClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            config: self.config.clone(),
            credentials: Arc::clone(&self.credentials),
        }
    }
}

impl ApiClient {
    /// Create a new client.
    pub fn new(config: ApiConfig, credentials: Arc<dyn CredentialStore>) -> ApiResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(Duration::from_secs(90))
            .pool_max_idle_per_host(10)
            .user_agent(concat!("joblink-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiError::Network)?;

        Ok(Self {
            http,
            config,
            credentials,
        })
    }

    /// Create from environment variables.
    pub fn from_env(credentials: Arc<dyn CredentialStore>) -> ApiResult<Self> {
        Self::new(ApiConfig::from_env(), credentials)
    }

    /// The credential store requests read their token from.
    pub fn credentials(&self) -> Arc<dyn CredentialStore> {
        Arc::clone(&self.credentials)
    }

    /// Absolute URL for a resource path.
    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Attach the stored credential, if any, then send.
    async fn send(&self, url: &str, builder: RequestBuilder) -> ApiResult<Response> {
        let builder = match self.credentials.load()? {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };

        let response = builder.send().await?;
        let status = response.status();
        debug!(%url, status = status.as_u16(), "request completed");

        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_http_status(
                status.as_u16(),
                format!("{} failed: {}", url, body),
            ))
        }
    }

    // =========================================================================
    // Request helpers
    // =========================================================================

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.endpoint(path);
        let response = self.send(&url, self.http.get(&url)).await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn get_json_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<T> {
        let url = self.endpoint(path);
        let response = self.send(&url, self.http.get(&url).query(query)).await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path);
        let response = self.send(&url, self.http.post(&url).json(body)).await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn post_no_body<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.endpoint(path);
        let response = self.send(&url, self.http.post(&url)).await?;
        Ok(response.json().await?)
    }

    /// POST where the caller only needs the acknowledgement.
    pub(crate) async fn post_and_forget(&self, path: &str) -> ApiResult<()> {
        let url = self.endpoint(path);
        self.send(&url, self.http.post(&url)).await?;
        Ok(())
    }

    pub(crate) async fn put_json<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path);
        let response = self.send(&url, self.http.put(&url).json(body)).await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn patch_json<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path);
        let response = self.send(&url, self.http.patch(&url).json(body)).await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn delete_resource(&self, path: &str) -> ApiResult<()> {
        let url = self.endpoint(path);
        self.send(&url, self.http.delete(&url)).await?;
        Ok(())
    }
}
