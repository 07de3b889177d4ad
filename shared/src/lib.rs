//! Shared types for the bazaar admin client
//!
//! Entity models, API response envelope and auth DTOs shared between
//! the HTTP client and the console layer. These are transient,
//! non-authoritative copies of backend-owned entities: every
//! constraint (uniqueness, referential integrity, deactivation
//! guards) is re-validated server-side.

pub mod client;
pub mod models;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use client::{ChangePasswordRequest, ForcePasswordChange, LoginOutcome, LoginRequest, UserInfo};
pub use response::{ApiResponse, Paginated};
