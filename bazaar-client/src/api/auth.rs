//! Auth API

use serde_json::Value;
use shared::client::{
    ChangePasswordRequest, ForcePasswordChange, LoginData, LoginOutcome, LoginRequest, UserInfo,
};
use shared::response::ApiResponse;

use crate::error::{ClientError, ClientResult};
use crate::http::ApiClient;

impl ApiClient {
    /// Login with username and password.
    ///
    /// On the normal path the token is persisted and the dashboard is
    /// reachable. When the stored password hash is null the backend
    /// answers 403 with `requiresPasswordChange`; the temporary token
    /// is persisted so the forced change-password call can
    /// authenticate, and the caller must route to that flow.
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<LoginOutcome> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response: ApiResponse<Value> = self.post("/auth/login", &request).await?;
        let success = response.success;
        let message = response.message.clone();
        let data = response
            .into_data("login data")
            .map_err(ClientError::InvalidResponse)?;

        if success {
            let login: LoginData = serde_json::from_value(data)?;
            self.set_token(&login.token)?;
            return Ok(LoginOutcome::LoggedIn(login));
        }

        let force: ForcePasswordChange = serde_json::from_value(data)?;
        if !force.requires_password_change {
            return Err(ClientError::InvalidResponse(
                "Login failed without a password-change demand".into(),
            ));
        }
        if let Some(token) = &force.token {
            self.set_token(token)?;
        }
        Ok(LoginOutcome::PasswordChangeRequired {
            token: force.token,
            message,
        })
    }

    /// Logout. The token is cleared even when the call itself fails.
    pub async fn logout(&self) -> ClientResult<()> {
        let result: ClientResult<ApiResponse<Value>> = self.post_empty("/auth/logout").await;
        self.clear_token()?;
        result.map(|_| ())
    }

    /// Current user information
    pub async fn current_user(&self) -> ClientResult<ApiResponse<UserInfo>> {
        self.get("/auth/me").await
    }

    /// Change the password of the logged-in user
    pub async fn change_password(
        &self,
        old_password: &str,
        new_password: &str,
    ) -> ClientResult<ApiResponse<Value>> {
        let request = ChangePasswordRequest {
            old_password: old_password.to_string(),
            new_password: new_password.to_string(),
        };
        self.put("/auth/change-password", &request).await
    }
}
