//! GET /health -- liveness, model configuration and history policy.
//!
//! Always 200: a disabled adapter is a degraded state, not a dead process.

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::state::AppState;

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let adapter = state.chat_service.adapter();

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "model_configured": adapter.is_enabled(),
        "model": adapter.model_name(),
        "history_mode": state.chat_service.history_mode(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
