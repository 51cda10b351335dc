// src/routes/send.rs
use axum::{Json, extract::State};

use crate::{
    error::AppError,
    message::{MAX_MESSAGE_CHARS, SendMessageRequest, SendMessageResponse},
    state::SharedState,
};

/// The relay endpoint: forwards operator input to the Graph API as one
/// synchronous call and reflects the provider's verdict back.
pub async fn send_message_handler(
    State(state): State<SharedState>,
    Json(payload): Json<SendMessageRequest>,
) -> Result<Json<SendMessageResponse>, AppError> {
    validate(&payload.recipient_id, &payload.message)?;

    state
        .graph
        .send_text(&payload.recipient_id, &payload.message)
        .await?;

    Ok(Json(SendMessageResponse {
        status: "Message sent".to_string(),
    }))
}

fn validate(recipient_id: &str, message: &str) -> Result<(), AppError> {
    if recipient_id.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Recipient id cannot be empty".to_string(),
        ));
    }
    if message.trim().is_empty() {
        return Err(AppError::BadRequest("Message cannot be empty".to_string()));
    }
    if message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(AppError::BadRequest(format!(
            "Message cannot exceed {MAX_MESSAGE_CHARS} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_message_at_the_limit() {
        assert!(validate("12345", &"a".repeat(MAX_MESSAGE_CHARS)).is_ok());
    }

    #[test]
    fn rejects_message_over_the_limit() {
        assert!(validate("12345", &"a".repeat(MAX_MESSAGE_CHARS + 1)).is_err());
    }

    #[test]
    fn rejects_blank_input() {
        assert!(validate("", "hello").is_err());
        assert!(validate("12345", "   ").is_err());
    }

    #[test]
    fn limit_counts_characters_not_bytes() {
        // 2000 three-byte characters are still within the limit.
        assert!(validate("12345", &"あ".repeat(MAX_MESSAGE_CHARS)).is_ok());
    }
}
