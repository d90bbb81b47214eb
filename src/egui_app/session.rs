//! Session Token Storage
//!
//! The controller never reads the credential from ambient storage itself; it
//! gets a [`CredentialProvider`] at construction. [`SessionStore`] is the
//! desktop implementation: the `accessToken` lives in memory and is mirrored
//! to a small JSON file under the platform data directory.
//!
//! ```rust,no_run
//! use moim::egui_app::session::{CredentialProvider, SessionStore};
//!
//! let store = SessionStore::open_default().unwrap();
//! store.set_token(Some("jwt".to_string())).unwrap();
//! assert_eq!(store.access_token().as_deref(), Some("jwt"));
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use thiserror::Error;

/// Read-only access to the bearer credential
pub trait CredentialProvider: Send + Sync {
    /// The current access token, if the user is signed in
    fn access_token(&self) -> Option<String>;
}

/// Fixed credential, mostly for tests and one-shot tools
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials(Option<String>);

impl StaticCredentials {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    pub fn anonymous() -> Self {
        Self(None)
    }
}

impl CredentialProvider for StaticCredentials {
    fn access_token(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Session storage errors
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to access session file {path}: {message}")]
    Io { path: String, message: String },
    #[error("corrupt session file: {0}")]
    Corrupt(#[from] serde_json::Error),
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionFile {
    access_token: Option<String>,
}

/// File-backed session token store
#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
    token: RwLock<Option<String>>,
}

impl SessionStore {
    /// Platform-specific session file path
    pub fn default_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(std::env::temp_dir);
        path.push("moim");
        path.push("session.json");
        path
    }

    /// Open the store at the default location
    pub fn open_default() -> Result<Self, SessionError> {
        Self::open(Self::default_path())
    }

    /// Open the store at `path`, loading a previously saved token if present
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SessionError> {
        let path = path.into();
        let token = match std::fs::read_to_string(&path) {
            Ok(raw) if raw.trim().is_empty() => None,
            Ok(raw) => serde_json::from_str::<SessionFile>(&raw)?.access_token,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => return Err(io_error(&path, e)),
        };
        if token.is_some() {
            tracing::debug!("[SESSION] Restored session from {}", path.display());
        }
        Ok(Self {
            path,
            token: RwLock::new(token),
        })
    }

    /// Replace the token and persist it; `None` signs out
    pub fn set_token(&self, token: Option<String>) -> Result<(), SessionError> {
        let token = token.filter(|t| !t.trim().is_empty());
        self.persist(&token)?;
        match self.token.write() {
            Ok(mut guard) => *guard = token,
            Err(poisoned) => *poisoned.into_inner() = token,
        }
        Ok(())
    }

    /// Sign out
    pub fn clear(&self) -> Result<(), SessionError> {
        self.set_token(None)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, token: &Option<String>) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
        }
        let body = serde_json::to_string(&SessionFile {
            access_token: token.clone(),
        })?;
        std::fs::write(&self.path, body).map_err(|e| io_error(&self.path, e))
    }
}

impl CredentialProvider for SessionStore {
    fn access_token(&self) -> Option<String> {
        match self.token.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

fn io_error(path: &Path, err: std::io::Error) -> SessionError {
    SessionError::Io {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_credentials() {
        assert_eq!(StaticCredentials::new("t").access_token(), Some("t".to_string()));
        assert!(StaticCredentials::anonymous().access_token().is_none());
    }

    #[test]
    fn test_missing_file_means_signed_out() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::open(dir.path().join("session.json")).unwrap();
        assert!(store.access_token().is_none());
    }

    #[test]
    fn test_token_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        let store = SessionStore::open(&path).unwrap();
        store.set_token(Some("abc".to_string())).unwrap();
        assert_eq!(store.access_token(), Some("abc".to_string()));

        let reopened = SessionStore::open(&path).unwrap();
        assert_eq!(reopened.access_token(), Some("abc".to_string()));

        reopened.clear().unwrap();
        assert!(SessionStore::open(&path).unwrap().access_token().is_none());
    }

    #[test]
    fn test_blank_token_is_signed_out() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::open(dir.path().join("s.json")).unwrap();
        store.set_token(Some("   ".to_string())).unwrap();
        assert!(store.access_token().is_none());
    }

    #[test]
    fn test_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("s.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(SessionStore::open(&path), Err(SessionError::Corrupt(_))));
    }
}
