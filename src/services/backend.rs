// src/services/backend.rs
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::message::{AppStatus, MessagesResponse, SendersResponse};

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("backend request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The backend answered with a non-2xx status; carries its status
    /// and body so callers can pass them through unchanged.
    #[error("backend returned {status}")]
    Failed {
        status: reqwest::StatusCode,
        body: Value,
    },
}

/// Read-only client for the bot backend that stores inbound messages
/// and tracks senders. Every call is a full refetch; nothing is cached.
#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn messages(&self) -> Result<MessagesResponse, BackendError> {
        self.get_json("/api/messages").await
    }

    pub async fn messages_for_sender(
        &self,
        sender_id: &str,
    ) -> Result<MessagesResponse, BackendError> {
        self.get_json(&format!("/api/messages/{sender_id}")).await
    }

    pub async fn senders(&self) -> Result<SendersResponse, BackendError> {
        self.get_json("/api/senders").await
    }

    pub async fn status(&self) -> Result<AppStatus, BackendError> {
        self.get_json("/api/status").await
    }

    pub async fn webhook_info(&self) -> Result<Value, BackendError> {
        self.get_json("/api/webhook-info").await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, BackendError> {
        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.json::<Value>().await.unwrap_or(Value::Null);
            tracing::warn!(%status, path, "bot backend returned an error");
            return Err(BackendError::Failed { status, body });
        }

        Ok(response.json().await?)
    }
}
