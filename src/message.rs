// src/message.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Longest text the send endpoint accepts for a single message.
pub const MAX_MESSAGE_CHARS: usize = 2000;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub recipient_id: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SendMessageResponse {
    pub status: String,
}

/// A stored message as the bot backend reports it. Extra fields the
/// backend attaches (message_id, page_id, type, ...) are carried
/// through unchanged so the proxy stays a pass-through.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub text: String,
    pub timestamp: String,
    pub is_incoming: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessagesResponse {
    pub messages: Vec<Message>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SendersResponse {
    pub senders: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AppStatus {
    pub status: String,
    pub message_count: usize,
    pub sender_count: usize,
    pub webhook_configured: bool,
    pub page_token_configured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_message_time: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Local configuration flags for the settings page. Reports presence
/// only, never the secret values.
#[derive(Debug, Serialize, Deserialize)]
pub struct ConfigInfo {
    pub page_token_configured: bool,
    pub verify_token_configured: bool,
    pub backend_api_url: String,
}
