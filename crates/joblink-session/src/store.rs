//! Process-wide session store.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tracing::{info, warn};

use joblink_client::{ApiClient, CredentialStore};
use joblink_models::{AuthResponse, LoginData, RegisterData, User};

use crate::error::SessionResult;
use crate::session::Session;

/// Single authority over authentication state.
///
/// The store is the only writer of the stored credential and of the
/// session's `current_user`/`loading` fields. Consumers read through
/// [`snapshot`](Self::snapshot) or [`subscribe`](Self::subscribe) and
/// mutate only through the actions below.
///
/// Known limitations, carried over deliberately:
/// - Concurrent auth actions are not guarded; whichever network response
///   arrives last wins.
/// - Tokens are never refreshed on a schedule. [`ApiClient::refresh_token`]
///   exists but nothing here calls it.
pub struct SessionStore {
    api: ApiClient,
    credentials: Arc<dyn CredentialStore>,
    state: watch::Sender<Session>,
    hydrated: AtomicBool,
}

impl SessionStore {
    /// Create a store over the given gateway.
    ///
    /// The store shares the gateway's credential store, so tokens it
    /// writes are picked up by the gateway's next request.
    pub fn new(api: ApiClient) -> Self {
        let credentials = api.credentials();
        let (state, _) = watch::channel(Session::default());

        Self {
            api,
            credentials,
            state,
            hydrated: AtomicBool::new(false),
        }
    }

    /// The gateway, for resource calls outside the session lifecycle.
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Point-in-time copy of the session state.
    pub fn snapshot(&self) -> Session {
        self.state.borrow().clone()
    }

    /// Subscribe to session changes.
    ///
    /// Every action publishes through this channel; consumers re-render
    /// on change instead of polling.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.state.subscribe()
    }

    /// Whether a user is currently signed in.
    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    /// Resolve a stored credential into a user, once, at startup.
    ///
    /// Without a stored credential this performs no network call. With
    /// one, the backend is asked for the current user; any failure evicts
    /// the credential and leaves the session anonymous. `loading` drops
    /// to false exactly when this resolves, on every branch. Repeat calls
    /// are no-ops.
    pub async fn initialize(&self) {
        if self.hydrated.swap(true, Ordering::SeqCst) {
            return;
        }

        let stored = match self.credentials.load() {
            Ok(stored) => stored,
            Err(e) => {
                warn!("failed to read stored credential: {}", e);
                None
            }
        };

        if stored.is_none() {
            self.state.send_modify(|session| session.loading = false);
            return;
        }

        match self.api.current_user().await {
            Ok(user) => {
                info!(user_id = %user.id, "session hydrated from stored credential");
                self.state.send_modify(|session| {
                    session.current_user = Some(user);
                    session.loading = false;
                });
            }
            Err(e) => {
                warn!("stored credential did not resolve, evicting: {}", e);
                if let Err(e) = self.credentials.clear() {
                    warn!("failed to evict stored credential: {}", e);
                }
                self.state.send_modify(|session| {
                    session.current_user = None;
                    session.loading = false;
                });
            }
        }
    }

    /// Sign in with email and password.
    ///
    /// On success the issued token is stored and the returned user
    /// published. On failure storage and session state are left exactly
    /// as they were and the error propagates to the caller.
    pub async fn login(&self, email: &str, password: &str) -> SessionResult<User> {
        let credentials = LoginData {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self.api.login(&credentials).await?;
        self.complete_auth(response)
    }

    /// Create an account and sign in as the new user.
    pub async fn register(&self, data: RegisterData) -> SessionResult<User> {
        let response = self.api.register(&data).await?;
        self.complete_auth(response)
    }

    /// Sign out.
    ///
    /// The credential is evicted and the anonymous state published before
    /// the backend hears about it; the server-side call is best-effort and
    /// its failure never reverses the local clear.
    pub async fn logout(&self) {
        if let Err(e) = self.credentials.clear() {
            warn!("failed to evict stored credential: {}", e);
        }
        self.publish_user(None);
        info!("session cleared");

        if let Err(e) = self.api.logout().await {
            warn!("backend logout failed: {}", e);
        }
    }

    /// Store the issued token, then publish the authenticated user.
    fn complete_auth(&self, response: AuthResponse) -> SessionResult<User> {
        self.credentials.store(&response.token)?;
        info!(user_id = %response.user.id, "session authenticated");
        self.publish_user(Some(response.user.clone()));
        Ok(response.user)
    }

    fn publish_user(&self, user: Option<User>) {
        self.state.send_modify(|session| session.current_user = user);
    }
}
