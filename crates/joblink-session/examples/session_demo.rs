//! Minimal consumer: hydrate the session, show who is signed in.
//!
//! Run against a local backend:
//!
//! ```sh
//! JOBLINK_API_URL=http://localhost:8001 cargo run --example session_demo
//! ```

use std::sync::Arc;

use joblink_client::{ApiClient, FileCredentialStore};
use joblink_session::SessionStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let credentials = Arc::new(FileCredentialStore::new(".joblink/auth_token"));
    let api = ApiClient::from_env(credentials)?;
    let store = SessionStore::new(api);

    let mut updates = store.subscribe();
    store.initialize().await;
    updates.changed().await?;

    let session = updates.borrow_and_update().clone();
    match session.current_user {
        Some(user) => println!("signed in as {} ({})", user.full_name(), user.email),
        None => println!("not signed in"),
    }

    Ok(())
}
