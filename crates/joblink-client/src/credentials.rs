//! Bearer credential persistence.
//!
//! The platform issues one opaque bearer token per authenticated client.
//! Exactly one token is stored at a time, under a single durable key;
//! absence means unauthenticated. The gateway reads the token fresh before
//! every request and never writes it; the session store is the sole writer.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::error::{ApiError, ApiResult};

/// Durable storage for the bearer credential.
pub trait CredentialStore: Send + Sync {
    /// Read the stored token, if any.
    fn load(&self) -> ApiResult<Option<String>>;

    /// Replace the stored token.
    fn store(&self, token: &str) -> ApiResult<()>;

    /// Evict the stored token. Evicting an absent token is a no-op.
    fn clear(&self) -> ApiResult<()>;
}

/// File-backed store persisting the token across process restarts.
///
/// The token is kept verbatim in a single file; a missing or blank file
/// reads as "no credential".
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// Create a store backed by the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> ApiResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(token.to_string()))
                }
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ApiError::Credential(e)),
        }
    }

    fn store(&self, token: &str) -> ApiResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)?;
        Ok(())
    }

    fn clear(&self) -> ApiResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ApiError::Credential(e)),
        }
    }
}

/// In-memory store for tests and embedded use.
#[derive(Default)]
pub struct MemoryCredentialStore {
    token: RwLock<Option<String>>,
}

impl MemoryCredentialStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding a token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> ApiResult<Option<String>> {
        let token = self.token.read().unwrap_or_else(|e| e.into_inner());
        Ok(token.clone())
    }

    fn store(&self, token: &str) -> ApiResult<()> {
        let mut slot = self.token.write().unwrap_or_else(|e| e.into_inner());
        *slot = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> ApiResult<()> {
        let mut slot = self.token.write().unwrap_or_else(|e| e.into_inner());
        *slot = None;
        Ok(())
    }
}
