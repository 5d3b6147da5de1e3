//! LLM (OpenAI) API client module
//!
//! Encapsulates the chat-completions call that turns a search digest into a
//! summary.

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use crate::errors::SummarizeError;
use crate::prompt;

const OPENAI_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_MODEL: &str = "gpt-4";

/// OpenAI chat-completions response (subset).
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

/// LLM API client for generating summaries
pub struct LlmClient {
    http: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl LlmClient {
    pub fn new(http: Client, api_key: String, model: Option<String>) -> Self {
        Self {
            http,
            api_key,
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: OPENAI_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different endpoint (test servers).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Summarize `text` with one chat-completions call.
    pub async fn summarize(&self, text: &str) -> Result<String, SummarizeError> {
        info!("Generating summary with model {}", self.model);

        let request_body = json!({
            "model": self.model,
            "messages": prompt::build_messages(text),
            "max_tokens": prompt::MAX_TOKENS,
            "temperature": prompt::TEMPERATURE,
        });

        let response = self
            .http
            .post(format!("{}/v1/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                error!("OpenAI API request failed: {}", e);
                SummarizeError::Transport(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            error!("OpenAI API returned {}", status);
            return Err(SummarizeError::Transport(format!("status {}", status)));
        }

        let body = response.text().await?;
        let completion: ChatCompletionResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse OpenAI response: {}", e);
            SummarizeError::Unexpected(e.to_string())
        })?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(SummarizeError::NoChoices)
    }
}
