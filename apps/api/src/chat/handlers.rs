//! Axum route handler for the chat endpoint.

use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::Value;

use crate::chat::prompts::{compose_system_prompt, EMPTY_COMPLETION_PLACEHOLDER};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// POST /api/chat
///
/// Validates the body by hand so a missing or non-string `message` yields a
/// 400 with the same `{message}` body shape as every other error, before any
/// upstream call is made.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = body
        .get("message")
        .and_then(Value::as_str)
        .ok_or_else(|| AppError::Validation("message must be a string".to_string()))?;
    if message.trim().is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }

    // Two independent reads; slight staleness between them is acceptable.
    let assignments = state.store.list_assignments().await?;
    let reflections = state.store.list_reflections().await?;

    let system_prompt = compose_system_prompt(&assignments, &reflections, message);

    let completion = state.llm.complete(&system_prompt, message).await?;

    let response = match completion.text() {
        Some(text) if !text.trim().is_empty() => text.to_string(),
        _ => EMPTY_COMPLETION_PLACEHOLDER.to_string(),
    };

    Ok(Json(ChatResponse { response }))
}
