//! Outbound message sending.

use async_trait::async_trait;
use teloxide::Bot;
use teloxide::prelude::Requester;
use teloxide::types::ChatId;
use tracing::debug;

use crate::errors::RelayError;

/// Destination for pipeline replies. The production implementation talks to
/// Telegram; tests substitute a recording sink.
#[async_trait]
pub trait ReplySink: Send + Sync {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<(), RelayError>;
}

/// Telegram sender backed by the process-wide reqwest client.
pub struct TelegramClient {
    bot: Bot,
}

impl TelegramClient {
    /// Build a bot over the shared HTTP client so Telegram calls reuse the
    /// same connection pool as the provider calls.
    pub fn new(token: &str, http: reqwest::Client) -> Self {
        Self { bot: Bot::with_client(token, http) }
    }
}

#[async_trait]
impl ReplySink for TelegramClient {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<(), RelayError> {
        debug!("sending reply to chat {}", chat_id.0);
        self.bot.send_message(chat_id, text).await?;
        Ok(())
    }
}
