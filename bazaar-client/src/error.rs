//! Client error types
//!
//! The taxonomy is HTTP-status-driven: a handful of statuses map to
//! canned human-readable messages, a server-provided `message` always
//! wins, and everything else falls back to the generic status error.

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// 401 - the session token was rejected
    #[error("Authentication required")]
    Unauthorized,

    /// 403 without a server message
    #[error("Access denied: You do not have permission.")]
    Forbidden,

    /// 409 without a server message
    #[error("Data conflict: This item already exists.")]
    Conflict,

    /// 413 without a server message
    #[error("File too large. Please choose a smaller image.")]
    PayloadTooLarge,

    /// 400 without a server message
    #[error("Bad Request: Invalid input data.")]
    BadRequest,

    /// Non-2xx with a server-provided message
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Non-2xx with no message and no canned mapping
    #[error("HTTP error: status {0}")]
    Status(u16),

    /// Response body did not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Token persistence failure
    #[error("Token store error: {0}")]
    TokenStore(#[from] std::io::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canned_messages() {
        assert_eq!(
            ClientError::Conflict.to_string(),
            "Data conflict: This item already exists."
        );
        assert_eq!(
            ClientError::Forbidden.to_string(),
            "Access denied: You do not have permission."
        );
        assert_eq!(
            ClientError::PayloadTooLarge.to_string(),
            "File too large. Please choose a smaller image."
        );
        assert_eq!(
            ClientError::BadRequest.to_string(),
            "Bad Request: Invalid input data."
        );
    }

    #[test]
    fn test_server_message_verbatim() {
        let err = ClientError::Api {
            status: 409,
            message: "Category 'Shoes' already exists".into(),
        };
        assert_eq!(err.to_string(), "Category 'Shoes' already exists");
    }

    #[test]
    fn test_generic_status_fallback() {
        assert_eq!(
            ClientError::Status(502).to_string(),
            "HTTP error: status 502"
        );
    }
}
