//! Client configuration

use std::path::PathBuf;

use crate::error::ClientResult;
use crate::http::ApiClient;

/// Configuration for connecting to the admin backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL including the `/api` prefix
    /// (e.g. "https://admin.example.com/api")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Where to persist the bearer token between runs.
    /// `None` keeps the token in memory only.
    pub token_path: Option<PathBuf>,
}

impl ClientConfig {
    /// Create a new configuration for the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
            token_path: None,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Persist the token at the given path
    pub fn with_token_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.token_path = Some(path.into());
        self
    }

    /// Create an API client from this configuration
    pub fn build(&self) -> ClientResult<ApiClient> {
        ApiClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080/api")
    }
}
