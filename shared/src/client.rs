//! Auth DTOs shared between the client and the console layer

use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Authenticated user information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub role_id: i64,
    pub role_name: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// Login response data on the normal path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginData {
    pub token: String,
    pub user: UserInfo,
}

/// The 403 login body when the stored password hash is null.
///
/// The backend hands out a temporary token so the forced
/// password-change call can authenticate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForcePasswordChange {
    pub requires_password_change: bool,
    #[serde(default)]
    pub token: Option<String>,
}

/// Outcome of a login attempt
#[derive(Debug, Clone)]
pub enum LoginOutcome {
    /// Normal login; token persisted, dashboard reachable
    LoggedIn(LoginData),
    /// Backend demands a password change before normal access resumes
    PasswordChangeRequired {
        /// Temporary session token, already persisted when present
        token: Option<String>,
        message: Option<String>,
    },
}

impl LoginOutcome {
    pub fn requires_password_change(&self) -> bool {
        matches!(self, LoginOutcome::PasswordChangeRequired { .. })
    }
}

/// Change password request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}
