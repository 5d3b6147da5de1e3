use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::{error, info};

use briefbot::api::{self, AppState};
use briefbot::clients::{LlmClient, SearchClient};
use briefbot::core::{AppConfig, Lifecycle, LifecycleState};
use briefbot::telegram::TelegramClient;

/// Connect/read timeout shared by every outbound call.
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    briefbot::setup_logging();

    let config = AppConfig::from_env()
        .map_err(|e| anyhow::anyhow!("Missing required environment variable: {}", e))?;

    let lifecycle = Arc::new(Lifecycle::new());
    lifecycle.set(LifecycleState::Starting);

    // One connection pool for Telegram, Brave, and OpenAI calls.
    let http = Client::builder()
        .timeout(HTTP_TIMEOUT)
        .build()
        .context("failed to build HTTP client")?;

    let state = AppState {
        search: Arc::new(SearchClient::new(http.clone(), config.brave_api_key.clone())),
        llm: Arc::new(LlmClient::new(
            http.clone(),
            config.openai_api_key.clone(),
            config.openai_model.clone(),
        )),
        replies: Arc::new(TelegramClient::new(&config.telegram_token, http.clone())),
        lifecycle: lifecycle.clone(),
    };

    let address = format!("{}:{}", config.bind_address, config.port);
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {}", address))?;

    lifecycle.set(LifecycleState::Running);
    info!("Telegram bot started on {}", address);

    let shutdown_lifecycle = lifecycle.clone();
    let served = axum::serve(listener, api::router(state))
        .with_graceful_shutdown(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for shutdown signal: {}", e);
            }
            shutdown_lifecycle.set(LifecycleState::Stopping);
            info!("Shutdown signal received");
        })
        .await;

    // Runs whether or not the server loop errored; the shared HTTP client
    // closes when its last clone drops.
    lifecycle.set(LifecycleState::Stopped);
    info!("Application stopped");

    served.context("server terminated unexpectedly")
}
