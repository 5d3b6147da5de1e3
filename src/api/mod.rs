//! HTTP surface: webhook intake and the health endpoint.

pub mod health;
pub mod webhook;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};

use crate::clients::{LlmClient, SearchClient};
use crate::core::Lifecycle;
use crate::telegram::ReplySink;

/// Shared handler state, assembled once at startup. Handlers only read it;
/// the lifecycle value is mutated solely by the composition point.
#[derive(Clone)]
pub struct AppState {
    pub search: Arc<SearchClient>,
    pub llm: Arc<LlmClient>,
    pub replies: Arc<dyn ReplySink>,
    pub lifecycle: Arc<Lifecycle>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/webhook", post(webhook::webhook))
        .route("/health", get(health::health))
        .with_state(state)
}
