//! On-disk session token persistence
//!
//! The sole persistence boundary for auth state: a small JSON file
//! holding the bearer token and the account it was issued to. Reads
//! degrade to "signed out" on any problem; only writes report errors.

use std::path::{Path, PathBuf};

use pdesk_common::Result;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Persisted session token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredToken {
    /// Bearer token issued by the backend
    pub token: String,
    /// Account name the token was issued to
    pub username: String,
}

/// Token file accessor
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the token file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted token, if a readable one exists
    pub fn load(&self) -> Option<StoredToken> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!("Could not read token file {}: {}", self.path.display(), e);
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(token) => Some(token),
            Err(e) => {
                warn!(
                    "Malformed token file {}: {} (treating as signed out)",
                    self.path.display(),
                    e
                );
                None
            }
        }
    }

    /// Persist a token, creating parent directories as needed
    pub fn save(&self, token: &StoredToken) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(token)?)?;
        Ok(())
    }

    /// Remove the persisted token; a missing file is not an error
    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
