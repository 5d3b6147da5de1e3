//! Telegram update projection and outbound client.

pub mod client;

pub use client::{ReplySink, TelegramClient};

use teloxide::types::{ChatId, Update, UpdateKind};

/// The request-scoped projection of an inbound update: where to reply and
/// what the user wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    pub chat_id: ChatId,
    pub text: String,
}

/// Project an update onto `{chat_id, text}`.
///
/// Returns `None` for anything the bot does not handle: non-message updates,
/// messages without text (media, service messages), and bot commands. Those
/// are dropped without a reply.
#[must_use]
pub fn incoming_text(update: &Update) -> Option<IncomingMessage> {
    let UpdateKind::Message(message) = &update.kind else {
        return None;
    };
    let text = message.text()?;
    if text.starts_with('/') {
        return None;
    }
    Some(IncomingMessage { chat_id: message.chat.id, text: text.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn update(payload: serde_json::Value) -> Update {
        serde_json::from_str(&payload.to_string()).expect("update should deserialize")
    }

    fn text_update(text: &str) -> Update {
        update(json!({
            "update_id": 10000,
            "message": {
                "message_id": 1,
                "date": 1_700_000_000,
                "chat": {"id": 42, "type": "private"},
                "text": text,
            }
        }))
    }

    #[test]
    fn projects_chat_id_and_text() {
        let incoming = incoming_text(&text_update("rust async runtimes")).unwrap();
        assert_eq!(incoming.chat_id, ChatId(42));
        assert_eq!(incoming.text, "rust async runtimes");
    }

    #[test]
    fn ignores_messages_without_text() {
        let no_text = update(json!({
            "update_id": 10001,
            "message": {
                "message_id": 2,
                "date": 1_700_000_000,
                "chat": {"id": -100, "type": "group", "title": "chatter"},
                "new_chat_title": "chatter 2",
            }
        }));
        assert!(incoming_text(&no_text).is_none());
    }

    #[test]
    fn ignores_non_message_updates() {
        let edited = update(json!({
            "update_id": 10002,
            "edited_message": {
                "message_id": 3,
                "date": 1_700_000_000,
                "chat": {"id": 42, "type": "private"},
                "text": "edited text",
            }
        }));
        assert!(incoming_text(&edited).is_none());
    }

    #[test]
    fn ignores_commands() {
        assert!(incoming_text(&text_update("/start")).is_none());
    }

    #[test]
    fn keeps_untrimmed_text() {
        // Trimming and the empty-text prompt are pipeline concerns.
        let incoming = incoming_text(&text_update("   ")).unwrap();
        assert_eq!(incoming.text, "   ");
    }
}
