// src/routes/backend.rs
//
// Pass-through reads against the bot backend, plus the local config
// introspection used by the settings page.
use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::Value;

use crate::{
    error::AppError,
    message::{AppStatus, ConfigInfo, MessagesResponse, SendersResponse},
    state::SharedState,
};

pub async fn list_messages(
    State(state): State<SharedState>,
) -> Result<Json<MessagesResponse>, AppError> {
    Ok(Json(state.backend.messages().await?))
}

pub async fn messages_for_sender(
    State(state): State<SharedState>,
    Path(sender_id): Path<String>,
) -> Result<Json<MessagesResponse>, AppError> {
    Ok(Json(state.backend.messages_for_sender(&sender_id).await?))
}

pub async fn list_senders(
    State(state): State<SharedState>,
) -> Result<Json<SendersResponse>, AppError> {
    Ok(Json(state.backend.senders().await?))
}

pub async fn app_status(State(state): State<SharedState>) -> Result<Json<AppStatus>, AppError> {
    Ok(Json(state.backend.status().await?))
}

pub async fn webhook_info(State(state): State<SharedState>) -> Result<Json<Value>, AppError> {
    Ok(Json(state.backend.webhook_info().await?))
}

pub async fn config_info(State(state): State<SharedState>) -> Json<ConfigInfo> {
    Json(ConfigInfo {
        page_token_configured: state.config.page_token_configured(),
        verify_token_configured: state.config.verify_token_configured(),
        backend_api_url: state.config.backend_api_url.clone(),
    })
}
