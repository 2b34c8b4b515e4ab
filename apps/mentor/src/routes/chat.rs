use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::models::chat::{ChatRequest, ChatResponseBody};
use crate::state::AppState;

/// POST /chat
///
/// Forwards the page's whole transcript to the LLM and answers `{reply}`.
/// Failures, unreadable request bodies included, answer `{error, details}` (see `AppError`).
pub async fn handle_chat(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponseBody>, AppError> {
    let Json(request) = body.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    if request.messages.is_empty() {
        return Err(AppError::Validation("messages cannot be empty".to_string()));
    }

    info!(messages = request.messages.len(), "Chat request");
    let reply = state.llm.chat(&request.messages).await?;

    Ok(Json(ChatResponseBody {
        reply: Some(reply),
        ..Default::default()
    }))
}
