/// briefbot - a Telegram bot that answers messages with a summarized web search.
///
/// Every inbound message runs the same linear pipeline: the text is sent to
/// Brave Web Search, the top results are condensed into a short digest, the
/// digest is summarized by OpenAI, and the summary is sent back to the chat.
/// Updates arrive over a webhook served by this process.
///
/// # Architecture
///
/// The system uses:
/// - axum for the webhook and health endpoints
/// - teloxide for Telegram API interactions
/// - reqwest (one shared client) for Brave and OpenAI calls
/// - Tokio for async runtime
///
/// There is no queue and no persistence; each webhook call processes its
/// update to completion inside its own request task.
// Module declarations
pub mod api;
pub mod clients;
pub mod core;
pub mod errors;
pub mod prompt;
pub mod telegram;
pub mod worker;

/// Configure structured logging for the bot process.
///
/// Sets up tracing-subscriber with an env-filter (`RUST_LOG`, defaulting to
/// `info`) and a compact formatter. Call once at startup, before the first
/// log line.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}
