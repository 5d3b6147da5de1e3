//! The per-message pipeline: validate, acknowledge, search, acknowledge,
//! summarize, deliver.
//!
//! Stages run strictly in sequence inside the webhook request's task. Stage
//! failures are converted to user-facing text here; the chat always gets a
//! reply except for updates the projection layer drops.

use teloxide::types::Update;
use tracing::{error, info};

use super::CANONICAL_FAILURE_MESSAGE;
use crate::clients::{LlmClient, SearchClient};
use crate::errors::RelayError;
use crate::telegram::{self, IncomingMessage, ReplySink};

const EMPTY_QUERY_PROMPT: &str = "Please send a search query.";
const ACK_SEARCHING: &str = "🔎 Searching...";
const ACK_SUMMARIZING: &str = "💡 Generating summary...";

/// Process one inbound update to completion.
///
/// Pipeline errors are handled here: the terminal fallback replies with a
/// generic apology. The returned error therefore only reports the case where
/// even that apology could not be delivered.
pub async fn process_update(
    search: &SearchClient,
    llm: &LlmClient,
    replies: &dyn ReplySink,
    update: &Update,
) -> Result<(), RelayError> {
    let Some(incoming) = telegram::incoming_text(update) else {
        return Ok(());
    };

    match run_pipeline(search, llm, replies, &incoming).await {
        Ok(()) => Ok(()),
        Err(e) => {
            error!("Error processing message for chat {}: {}", incoming.chat_id.0, e);
            replies.send_text(incoming.chat_id, CANONICAL_FAILURE_MESSAGE).await
        }
    }
}

async fn run_pipeline(
    search: &SearchClient,
    llm: &LlmClient,
    replies: &dyn ReplySink,
    incoming: &IncomingMessage,
) -> Result<(), RelayError> {
    let chat_id = incoming.chat_id;

    let query = incoming.text.trim();
    if query.is_empty() {
        replies.send_text(chat_id, EMPTY_QUERY_PROMPT).await?;
        return Ok(());
    }

    replies.send_text(chat_id, ACK_SEARCHING).await?;
    let digest = match search.search(query).await {
        Ok(digest) => digest,
        Err(e) => {
            error!("Search stage failed for chat {}: {}", chat_id.0, e);
            replies.send_text(chat_id, e.user_message()).await?;
            return Ok(());
        }
    };

    replies.send_text(chat_id, ACK_SUMMARIZING).await?;
    let summary = match llm.summarize(&digest).await {
        Ok(summary) => summary,
        Err(e) => {
            // A failed summarization still produces the final reply; its
            // user-facing message is the delivery text.
            error!("Summarization stage failed for chat {}: {}", chat_id.0, e);
            e.user_message().to_string()
        }
    };

    replies.send_text(chat_id, &summary).await?;
    info!("Delivered summary to chat {}", chat_id.0);
    Ok(())
}
