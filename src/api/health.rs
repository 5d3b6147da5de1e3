use axum::Json;
use axum::extract::State;
use serde::Serialize;

use super::AppState;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub bot_running: bool,
}

/// `GET /health` — always 200; `bot_running` reflects the lifecycle state
/// regardless of in-flight message processing.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy", bot_running: state.lifecycle.is_running() })
}
