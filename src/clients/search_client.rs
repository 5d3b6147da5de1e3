//! Brave Web Search client module
//!
//! Issues the search call and renders the top results into the plain-text
//! digest handed to the summarization stage.

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error};

use crate::errors::SearchError;

const SEARCH_BASE_URL: &str = "https://api.search.brave.com";

/// Result-count cap requested from the provider and applied to the digest.
pub const RESULT_COUNT: usize = 3;

/// A single web search result. Fields stay optional: rows with missing
/// title or URL are rendered with placeholders, not dropped.
#[derive(Debug, Clone, Deserialize)]
pub struct WebResult {
    pub title: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WebResults {
    #[serde(default)]
    results: Vec<WebResult>,
}

#[derive(Debug, Deserialize)]
struct WebSearchResponse {
    web: Option<WebResults>,
}

/// Client for the Brave Web Search API.
pub struct SearchClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl SearchClient {
    pub fn new(http: Client, api_key: String) -> Self {
        Self { http, api_key, base_url: SEARCH_BASE_URL.to_string() }
    }

    /// Point the client at a different endpoint (test servers).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Run one web search and return the rendered digest.
    ///
    /// Exactly one outbound call per invocation; every failure mode maps to
    /// a `SearchError` variant.
    pub async fn search(&self, query: &str) -> Result<String, SearchError> {
        debug!("searching web for: {}", query);

        let count = RESULT_COUNT.to_string();
        let response = self
            .http
            .get(format!("{}/res/v1/web/search", self.base_url))
            .header("Accept", "application/json")
            .header("X-Subscription-Token", &self.api_key)
            .query(&[("q", query), ("count", count.as_str())])
            .send()
            .await
            .map_err(|e| {
                error!("Search request failed: {}", e);
                SearchError::Transport(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            error!("Search API returned {}", status);
            return Err(SearchError::Transport(format!("status {}", status)));
        }

        let body = response.text().await?;
        let parsed: WebSearchResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse search response: {}", e);
            SearchError::Unexpected(e.to_string())
        })?;

        let results = parsed.web.map(|w| w.results).unwrap_or_default();
        if results.is_empty() {
            return Err(SearchError::Empty);
        }

        Ok(render_digest(&results))
    }
}

/// Render search results as `"<title> - <url>"` lines, at most
/// [`RESULT_COUNT`] of them, with placeholders for missing fields.
#[must_use]
pub fn render_digest(results: &[WebResult]) -> String {
    results
        .iter()
        .take(RESULT_COUNT)
        .map(|r| {
            format!(
                "{} - {}",
                r.title.as_deref().unwrap_or("No title"),
                r.url.as_deref().unwrap_or("No URL"),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: serde_json::Value) -> Vec<WebResult> {
        let parsed: WebSearchResponse = serde_json::from_value(raw).unwrap();
        parsed.web.map(|w| w.results).unwrap_or_default()
    }

    #[test]
    fn digest_joins_title_and_url_lines() {
        let results = parse(serde_json::json!({
            "web": {
                "results": [
                    {"title": "Rust", "url": "https://rust-lang.org"},
                    {"title": "Crates", "url": "https://crates.io"}
                ]
            }
        }));
        assert_eq!(
            render_digest(&results),
            "Rust - https://rust-lang.org\nCrates - https://crates.io"
        );
    }

    #[test]
    fn digest_substitutes_placeholders_for_missing_fields() {
        let results = parse(serde_json::json!({
            "web": {
                "results": [
                    {"url": "https://example.com"},
                    {"title": "Untracked", "url": null}
                ]
            }
        }));
        assert_eq!(
            render_digest(&results),
            "No title - https://example.com\nUntracked - No URL"
        );
    }

    #[test]
    fn digest_caps_at_three_lines() {
        let results = parse(serde_json::json!({
            "web": {
                "results": [
                    {"title": "a", "url": "https://a"},
                    {"title": "b", "url": "https://b"},
                    {"title": "c", "url": "https://c"},
                    {"title": "d", "url": "https://d"}
                ]
            }
        }));
        assert_eq!(render_digest(&results).lines().count(), 3);
        assert!(!render_digest(&results).contains("https://d"));
    }

    #[test]
    fn missing_web_section_parses_as_empty() {
        assert!(parse(serde_json::json!({"query": {"original": "x"}})).is_empty());
        assert!(parse(serde_json::json!({"web": {}})).is_empty());
    }
}
