//! Bazaar Client - HTTP client for the catalog admin backend
//!
//! Single chokepoint for all backend calls: token lifecycle,
//! success/error envelope normalization, status-to-message mapping,
//! and the session-expired broadcast.

pub mod api;
pub mod config;
pub mod error;
pub mod events;
pub mod http;
pub mod token;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use events::SessionEvent;
pub use http::ApiClient;
pub use token::TokenStore;

// Re-export shared types for convenience
pub use shared::{ApiResponse, LoginOutcome, Paginated, UserInfo};
