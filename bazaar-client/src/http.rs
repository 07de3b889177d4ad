//! Request core
//!
//! Every backend call funnels through [`ApiClient::execute`] and its
//! response handler, so the token lifecycle and the error taxonomy
//! live in exactly one place.

use std::sync::RwLock;

use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::broadcast;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::events::SessionEvent;
use crate::token::TokenStore;

/// Capacity of the session-event channel; expiry is rare and
/// subscribers only care about the latest signal.
const SESSION_CHANNEL_CAPACITY: usize = 16;

/// HTTP client for the admin backend
///
/// Owns the bearer token (mirrored in memory, persisted through
/// [`TokenStore`]) and broadcasts [`SessionEvent::Expired`] when the
/// backend answers 401.
#[derive(Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: RwLock<Option<String>>,
    store: TokenStore,
    session_tx: broadcast::Sender<SessionEvent>,
}

impl ApiClient {
    /// Create a new client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        let store = match &config.token_path {
            Some(path) => TokenStore::new(path),
            None => TokenStore::ephemeral(),
        };
        let token = store.load();
        let (session_tx, _) = broadcast::channel(SESSION_CHANNEL_CAPACITY);

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: RwLock::new(token),
            store,
            session_tx,
        })
    }

    /// API base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Current bearer token, if any
    pub fn token(&self) -> Option<String> {
        self.token.read().expect("token lock").clone()
    }

    /// Persist and start using a bearer token
    pub fn set_token(&self, token: impl Into<String>) -> ClientResult<()> {
        let token = token.into();
        self.store.save(&token)?;
        *self.token.write().expect("token lock") = Some(token);
        Ok(())
    }

    /// Drop the bearer token from memory and durable storage
    pub fn clear_token(&self) -> ClientResult<()> {
        self.store.clear()?;
        *self.token.write().expect("token lock") = None;
        Ok(())
    }

    /// Subscribe to session lifecycle events
    pub fn subscribe_session(&self) -> broadcast::Receiver<SessionEvent> {
        self.session_tx.subscribe()
    }

    fn auth_header(&self) -> Option<String> {
        self.token().map(|t| format!("Bearer {}", t))
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, method = %method, "api request");
        let mut req = self.client.request(method, &url);
        if let Some(auth) = self.auth_header() {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }
        req
    }

    // ========== Verb helpers ==========

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.execute(self.request(Method::GET, path)).await
    }

    pub async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ClientResult<T> {
        self.execute(self.request(Method::GET, path).query(query))
            .await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.execute(self.request(Method::POST, path).json(body))
            .await
    }

    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.execute(self.request(Method::POST, path)).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.execute(self.request(Method::PUT, path).json(body))
            .await
    }

    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.execute(self.request(Method::PATCH, path).json(body))
            .await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.execute(self.request(Method::DELETE, path)).await
    }

    pub async fn delete_with_body<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.execute(self.request(Method::DELETE, path).json(body))
            .await
    }

    /// Multipart file upload
    ///
    /// Bypasses the JSON content type (reqwest sets the multipart
    /// boundary) but reuses the auth header and error path. The field
    /// name is always `image`, matching the backend contract.
    pub async fn upload<T: DeserializeOwned>(
        &self,
        path: &str,
        filename: &str,
        bytes: Vec<u8>,
        mime: &str,
    ) -> ClientResult<T> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str(mime)?;
        let form = reqwest::multipart::Form::new().part("image", part);
        self.execute(self.request(Method::POST, path).multipart(form))
            .await
    }

    // ========== Response handling ==========

    async fn execute<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> ClientResult<T> {
        let response = req.send().await?;
        self.handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        let text = response.text().await?;
        let body: Option<Value> = serde_json::from_str(&text).ok();

        if status == StatusCode::UNAUTHORIZED {
            self.expire_session();
            return Err(ClientError::Unauthorized);
        }

        // Forced password change: the backend answers 403 but the
        // caller must receive the body to route into the
        // change-password flow instead of failing.
        if status == StatusCode::FORBIDDEN {
            if let Some(value) = &body {
                if requires_password_change(value) {
                    return serde_json::from_value(value.clone())
                        .map_err(|e| ClientError::InvalidResponse(e.to_string()));
                }
            }
        }

        if let Some(message) = body.as_ref().and_then(server_message) {
            tracing::warn!(status = status.as_u16(), %message, "api error");
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        tracing::warn!(status = status.as_u16(), "api error without message body");
        Err(match status {
            StatusCode::CONFLICT => ClientError::Conflict,
            StatusCode::FORBIDDEN => ClientError::Forbidden,
            StatusCode::PAYLOAD_TOO_LARGE => ClientError::PayloadTooLarge,
            StatusCode::BAD_REQUEST => ClientError::BadRequest,
            _ => ClientError::Status(status.as_u16()),
        })
    }

    /// 401 handling: clear the token everywhere and signal every
    /// subscriber exactly once.
    fn expire_session(&self) {
        if let Err(err) = self.store.clear() {
            tracing::warn!(%err, "failed to clear persisted token");
        }
        *self.token.write().expect("token lock") = None;
        // send only errors when nobody is subscribed
        let _ = self.session_tx.send(SessionEvent::Expired);
    }
}

fn requires_password_change(body: &Value) -> bool {
    body.get("data")
        .and_then(|d| d.get("requiresPasswordChange"))
        .and_then(Value::as_bool)
        == Some(true)
}

fn server_message(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}
