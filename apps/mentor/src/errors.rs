use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::models::chat::ChatResponseBody;

/// Application-level error type for the chat proxy.
/// Renders as the `{error, details}` body the chat page understands.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "Validation error", msg.clone()),
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error", e.to_string())
            }
        };

        let body = Json(ChatResponseBody {
            reply: None,
            error: Some(error.to_string()),
            details: Some(details),
        });

        (status, body).into_response()
    }
}
