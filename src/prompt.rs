use serde_json::{Value, json};

/// System prompt establishing the summarizer persona.
pub const SYSTEM_PROMPT: &str =
    "You are a helpful assistant that summarizes search results concisely.";

/// Output-length cap for generated summaries.
pub const MAX_TOKENS: u32 = 500;

/// Sampling temperature for summary generation.
pub const TEMPERATURE: f32 = 0.7;

/// Build the user-turn prompt embedding the search digest.
#[must_use]
pub fn build_user_prompt(digest: &str) -> String {
    format!("Summarize and explain these search results:\n{}", digest)
}

/// Build the chat-completions message list: one system turn, one user turn.
#[must_use]
pub fn build_messages(digest: &str) -> Value {
    json!([
        {
            "role": "system",
            "content": SYSTEM_PROMPT,
        },
        {
            "role": "user",
            "content": build_user_prompt(digest),
        }
    ])
}
