// src/services/graph.rs
use serde::Serialize;
use serde_json::Value;

/// Wire format of the Graph API `me/messages` call.
#[derive(Debug, Serialize)]
struct GraphSendBody<'a> {
    recipient: GraphRecipient<'a>,
    message: GraphText<'a>,
}

#[derive(Debug, Serialize)]
struct GraphRecipient<'a> {
    id: &'a str,
}

#[derive(Debug, Serialize)]
struct GraphText<'a> {
    text: &'a str,
}

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("graph api request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Non-2xx answer from the Graph API; carries the provider's error
    /// object so callers can pass it through unchanged.
    #[error("graph api rejected the message")]
    Rejected(Value),
}

/// Thin client for the Facebook Graph API messaging endpoint. One
/// synchronous call per send, no retries, no queuing.
#[derive(Clone)]
pub struct GraphClient {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl GraphClient {
    pub fn new(
        http: reqwest::Client,
        base_url: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: access_token.into(),
        }
    }

    /// Send a single text message to a PSID.
    pub async fn send_text(&self, recipient_id: &str, text: &str) -> Result<(), RelayError> {
        let url = format!("{}/me/messages", self.base_url);
        let body = GraphSendBody {
            recipient: GraphRecipient { id: recipient_id },
            message: GraphText { text },
        };

        let response = self
            .http
            .post(&url)
            .query(&[("access_token", self.access_token.as_str())])
            .json(&body)
            .send()
            .await?;

        if response.status().is_success() {
            tracing::info!(recipient_id, "message relayed to graph api");
            return Ok(());
        }

        let status = response.status();
        let payload = response.json::<Value>().await.unwrap_or(Value::Null);
        tracing::warn!(%status, "graph api rejected the message");

        // The Graph API wraps its failures as {"error": {...}}.
        let detail = payload.get("error").cloned().unwrap_or(payload);
        Err(RelayError::Rejected(detail))
    }
}
