//! HTTP handlers for the assistant chat endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared::ChatMessage;

use crate::error::AppResult;
use crate::AppState;

#[derive(Serialize)]
pub struct ChatSessionResponse {
    pub id: Uuid,
    pub messages: Vec<ChatMessage>,
}

/// Start a conversation; the reply carries the greeting message
pub async fn create_chat_session(State(state): State<AppState>) -> Json<ChatSessionResponse> {
    let (id, messages) = state.chat.create_session();
    Json(ChatSessionResponse { id, messages })
}

/// Full message history of a conversation
pub async fn get_chat_messages(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> AppResult<Json<Vec<ChatMessage>>> {
    Ok(Json(state.chat.messages(session_id)?))
}

#[derive(Debug, Deserialize)]
pub struct SendMessageInput {
    pub content: String,
}

/// Send a user message and get the updated history back.
///
/// Never fails on assistant trouble: a fallback assistant message is
/// appended instead.
pub async fn send_chat_message(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(input): Json<SendMessageInput>,
) -> AppResult<Json<Vec<ChatMessage>>> {
    let messages = state.chat.send(session_id, &input.content).await?;
    Ok(Json(messages))
}

/// Reset a conversation back to the greeting
pub async fn clear_chat_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> AppResult<Json<Vec<ChatMessage>>> {
    Ok(Json(state.chat.clear(session_id)?))
}

/// Prompt suggestions shown next to the input box
pub async fn get_suggested_questions() -> Json<Vec<String>> {
    Json(crate::fixtures::suggested_questions())
}
