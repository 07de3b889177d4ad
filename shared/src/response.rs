//! API response envelope
//!
//! Every backend endpoint answers with the same envelope:
//! `{success: bool, data: ..., message: ...}`. The client returns the
//! envelope verbatim to callers; it never rewrites `data`.

use serde::{Deserialize, Serialize};

/// Unified API response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    /// Response payload (present on success, and on the forced
    /// password-change 403 escape hatch)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create a success response with data
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    /// Create an error response with a message
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }

    /// Extract the payload, treating a missing `data` as a protocol
    /// violation described by `what`
    pub fn into_data(self, what: &str) -> Result<T, String> {
        self.data.ok_or_else(|| format!("Missing {} in response", what))
    }
}

/// One page of a paginated listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
}

impl<T> Paginated<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether a page exists after the current one
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}
