use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde_json::{Value, json};
use teloxide::types::Update;
use tracing::{error, warn};

use super::AppState;
use crate::errors::RelayError;
use crate::worker;

/// `POST /webhook` — Telegram update intake.
///
/// The update is processed to completion before the webhook response is
/// written; Telegram's retry behavior is keyed off that response.
#[tracing::instrument(level = "info", skip_all)]
pub async fn webhook(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let update: Update = match serde_json::from_str(&payload.to_string()) {
        Ok(update) => update,
        Err(e) => {
            warn!("{}", RelayError::Parse(e.to_string()));
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({"detail": "Invalid update data"})),
            );
        }
    };

    match worker::process_update(&state.search, &state.llm, state.replies.as_ref(), &update).await
    {
        Ok(()) => (StatusCode::OK, Json(json!({"ok": true}))),
        Err(e) => {
            error!("Webhook error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"detail": "Internal server error"})),
            )
        }
    }
}
