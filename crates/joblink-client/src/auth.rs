//! Authentication endpoints.

use joblink_models::{AuthResponse, LoginData, RegisterData, TokenResponse, User};

use crate::client::ApiClient;
use crate::error::ApiResult;

impl ApiClient {
    /// Exchange credentials for a bearer token and the matching user.
    pub async fn login(&self, credentials: &LoginData) -> ApiResult<AuthResponse> {
        self.post_json("/auth/login/", credentials).await
    }

    /// Create an account; responds like a successful login.
    pub async fn register(&self, data: &RegisterData) -> ApiResult<AuthResponse> {
        self.post_json("/auth/register/", data).await
    }

    /// Invalidate the current token on the backend.
    ///
    /// The stored credential is not touched here; evicting it is the
    /// session store's responsibility.
    pub async fn logout(&self) -> ApiResult<()> {
        self.post_and_forget("/auth/logout/").await
    }

    /// Resolve the stored credential into the current user.
    pub async fn current_user(&self) -> ApiResult<User> {
        self.get_json("/auth/user/").await
    }

    /// Obtain a fresh token for the current session.
    pub async fn refresh_token(&self) -> ApiResult<TokenResponse> {
        self.post_no_body("/auth/refresh/").await
    }
}
