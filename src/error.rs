// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::services::backend::BackendError;
use crate::services::graph::RelayError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    /// The messaging provider rejected the send; the payload is the
    /// provider's error object, returned to the caller verbatim.
    #[error("provider rejected the message")]
    ProviderRejected(serde_json::Value),
    #[error("failed to reach the messaging provider")]
    ProviderUnreachable(#[source] reqwest::Error),
    /// The bot backend answered with a non-2xx status; its status and
    /// body are passed through to the caller.
    #[error("bot backend returned an error")]
    BackendFailed {
        status: StatusCode,
        body: serde_json::Value,
    },
    #[error("failed to reach the bot backend")]
    BackendUnreachable(#[source] reqwest::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::ProviderRejected(detail) => {
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": detail }))
            }
            AppError::ProviderUnreachable(err) => {
                tracing::error!(error = %err, "graph api request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "failed to reach the messaging provider" }),
                )
            }
            AppError::BackendFailed { status, body } => {
                let body = if body.is_null() {
                    json!({ "error": format!("bot backend returned {status}") })
                } else {
                    body
                };
                (status, body)
            }
            AppError::BackendUnreachable(err) => {
                tracing::error!(error = %err, "bot backend request failed");
                (
                    StatusCode::BAD_GATEWAY,
                    json!({ "error": "failed to reach the bot backend" }),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

impl From<RelayError> for AppError {
    fn from(err: RelayError) -> Self {
        match err {
            RelayError::Rejected(detail) => AppError::ProviderRejected(detail),
            RelayError::Transport(err) => AppError::ProviderUnreachable(err),
        }
    }
}

impl From<BackendError> for AppError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Failed { status, body } => AppError::BackendFailed { status, body },
            BackendError::Transport(err) => AppError::BackendUnreachable(err),
        }
    }
}
