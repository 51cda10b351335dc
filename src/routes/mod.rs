// src/routes/mod.rs
pub mod backend;
pub mod send;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::SharedState;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/api/send-message", post(send::send_message_handler))
        .route("/api/messages", get(backend::list_messages))
        .route("/api/messages/{sender_id}", get(backend::messages_for_sender))
        .route("/api/senders", get(backend::list_senders))
        .route("/api/status", get(backend::app_status))
        .route("/api/webhook-info", get(backend::webhook_info))
        .route("/api/config", get(backend::config_info))
        .route("/health", get(|| async { "OK" }))
        .fallback_service(ServeDir::new("public"))
        .layer(TraceLayer::new_for_http())
}
