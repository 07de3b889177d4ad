//! Durable bearer-token storage
//!
//! Stands in for the browser's localStorage: a small JSON file at a
//! configurable path. When no path is configured the store is a
//! no-op and the token lives only in the client's memory.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk token record
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredToken {
    token: String,
}

/// Token persistence
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: Option<PathBuf>,
}

impl TokenStore {
    /// Create a file-backed store
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Create a memory-only store (nothing persists)
    pub fn ephemeral() -> Self {
        Self { path: None }
    }

    /// Load the persisted token, if any
    pub fn load(&self) -> Option<String> {
        let path = self.path.as_ref()?;
        let json = fs::read_to_string(path).ok()?;
        let stored: StoredToken = serde_json::from_str(&json).ok()?;
        Some(stored.token)
    }

    /// Persist a token
    pub fn save(&self, token: &str) -> std::io::Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&StoredToken {
            token: token.to_string(),
        })?;
        fs::write(path, json)
    }

    /// Remove the persisted token
    pub fn clear(&self) -> std::io::Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Whether a token file exists on disk
    pub fn exists(&self) -> bool {
        self.path.as_ref().is_some_and(|p| p.exists())
    }

    /// Storage path, if file-backed
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
