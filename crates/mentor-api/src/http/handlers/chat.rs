//! Chat endpoint.
//!
//! POST /chat
//!
//! Request: `{ "message": "...", "history": [ {role, parts:[{text}]} | {role, text}, ... ] }`
//! Response: `{ "reply": "..." }` or `{ "error": "..." }`.
//!
//! The body is extracted as a `Result` so the configuration check runs
//! before the body is looked at, and malformed JSON still gets a JSON error.

use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use tracing::{info_span, Instrument};
use uuid::Uuid;

use mentor_types::chat::{ChatReply, ChatRequest};
use mentor_types::error::ChatError;

use crate::http::error::AppError;
use crate::state::AppState;

/// POST /chat -- relay one message to the model.
pub async fn chat(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, AppError> {
    let request_id = Uuid::now_v7();
    let span = info_span!("chat", %request_id);

    async move {
        state.chat_service.ensure_configured()?;

        let Json(request) = body.map_err(|e| ChatError::InvalidBody(e.body_text()))?;

        let start = Instant::now();
        let reply = state.chat_service.reply(request).await?;

        tracing::info!(
            response_time_ms = start.elapsed().as_millis() as u64,
            reply_chars = reply.reply.chars().count(),
            "chat reply generated"
        );

        Ok(Json(reply))
    }
    .instrument(span)
    .await
}
