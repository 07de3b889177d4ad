//! Login/session flow
//!
//! State progression: `LoggedOut` -> `ForcePasswordChange` or
//! `Active`. The dashboard (and every other view) is reachable only
//! from `Active`; a session-expired broadcast demotes any state back
//! to `LoggedOut`.

use std::sync::Arc;

use tokio::sync::broadcast;

use bazaar_client::{ApiClient, ClientError, ClientResult, SessionEvent};
use shared::client::UserInfo;

use crate::permissions::PermissionSet;

/// Where the UI currently stands
#[derive(Debug, Clone)]
pub enum SessionState {
    LoggedOut,
    /// Backend demands a new password before normal access resumes
    ForcePasswordChange,
    Active(UserInfo),
}

impl SessionState {
    pub fn is_active(&self) -> bool {
        matches!(self, SessionState::Active(_))
    }
}

/// Session controller owned by the UI shell
#[derive(Debug)]
pub struct Session {
    client: Arc<ApiClient>,
    state: SessionState,
    events: broadcast::Receiver<SessionEvent>,
}

impl Session {
    pub fn new(client: Arc<ApiClient>) -> Self {
        let events = client.subscribe_session();
        Self {
            client,
            state: SessionState::LoggedOut,
            events,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Whether any dashboard view may render
    pub fn dashboard_reachable(&self) -> bool {
        self.state.is_active()
    }

    /// Permission gate for the active user, if any
    pub fn permissions(&self) -> Option<PermissionSet> {
        match &self.state {
            SessionState::Active(user) => Some(PermissionSet::from_user(user)),
            _ => None,
        }
    }

    /// Drain pending session events; a 401 anywhere in the app drops
    /// the session back to the login screen.
    pub fn poll_events(&mut self) -> &SessionState {
        loop {
            match self.events.try_recv() {
                Ok(SessionEvent::Expired) => {
                    tracing::info!("session expired, forcing logout");
                    self.state = SessionState::LoggedOut;
                }
                Err(broadcast::error::TryRecvError::Lagged(_)) => continue,
                Err(_) => break,
            }
        }
        &self.state
    }

    /// Attempt a login and move the state accordingly
    pub async fn login(&mut self, username: &str, password: &str) -> ClientResult<&SessionState> {
        match self.client.login(username, password).await? {
            bazaar_client::LoginOutcome::LoggedIn(data) => {
                self.state = SessionState::Active(data.user);
            }
            bazaar_client::LoginOutcome::PasswordChangeRequired { .. } => {
                self.state = SessionState::ForcePasswordChange;
            }
        }
        Ok(&self.state)
    }

    /// Change the password. From the forced flow the session drops to
    /// `LoggedOut` on success; the user must log in again with the new
    /// password.
    pub async fn change_password(&mut self, old: &str, new: &str) -> ClientResult<()> {
        if matches!(self.state, SessionState::LoggedOut) {
            return Err(ClientError::Unauthorized);
        }
        self.client.change_password(old, new).await?;
        if matches!(self.state, SessionState::ForcePasswordChange) {
            self.client.clear_token()?;
            self.state = SessionState::LoggedOut;
        }
        Ok(())
    }

    /// Logout; the state is `LoggedOut` afterwards no matter what the
    /// backend answered.
    pub async fn logout(&mut self) -> ClientResult<()> {
        let result = self.client.logout().await;
        self.state = SessionState::LoggedOut;
        result
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}
