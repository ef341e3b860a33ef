//! Chat endpoints: send a message, read or clear the transcript

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::domain::ChatMessage;
use crate::error::Result;
use crate::session::ChatTurn;
use crate::state::AppState;

/// Request to analyse one chat message
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub message: String,
}

/// Response containing the full transcript
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub messages: Vec<ChatMessage>,
}

async fn send_message(
    State(state): State<AppState>,
    Json(request): Json<SendMessageRequest>,
) -> Result<Json<ChatTurn>> {
    let turn = state.chat.send_message(&request.message).await?;
    Ok(Json(turn))
}

async fn get_history(State(state): State<AppState>) -> Json<HistoryResponse> {
    Json(HistoryResponse {
        messages: state.chat.history().await,
    })
}

async fn clear_history(State(state): State<AppState>) -> StatusCode {
    state.chat.clear().await;
    StatusCode::NO_CONTENT
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/chat", post(send_message))
        .route("/chat/history", get(get_history).delete(clear_history))
}
