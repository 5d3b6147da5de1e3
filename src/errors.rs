use thiserror::Error;

/// Failure of the search stage.
///
/// Callers branch on the variant; `user_message` is the text relayed to the
/// chat when the pipeline short-circuits on one of these.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Failed to reach search API: {0}")]
    Transport(String),

    #[error("Search returned an empty result set")]
    Empty,

    #[error("Unexpected search API response: {0}")]
    Unexpected(String),
}

impl SearchError {
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            SearchError::Transport(_) => "Search service temporarily unavailable.",
            SearchError::Empty => "No search results found.",
            SearchError::Unexpected(_) => "An error occurred during search.",
        }
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(error: reqwest::Error) -> Self {
        SearchError::Transport(error.to_string())
    }
}

/// Failure of the summarization stage.
#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("Failed to reach OpenAI API: {0}")]
    Transport(String),

    #[error("Completion contained no choices")]
    NoChoices,

    #[error("Unexpected OpenAI API response: {0}")]
    Unexpected(String),
}

impl SummarizeError {
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            SummarizeError::Transport(_) => "Summary service temporarily unavailable.",
            SummarizeError::NoChoices => "Unable to generate summary.",
            SummarizeError::Unexpected(_) => "An error occurred while generating summary.",
        }
    }
}

impl From<reqwest::Error> for SummarizeError {
    fn from(error: reqwest::Error) -> Self {
        SummarizeError::Transport(error.to_string())
    }
}

/// Errors surfaced by the dispatch layer itself: sending replies and parsing
/// inbound updates. Stage failures never reach this type; they are converted
/// to user-facing text inside the pipeline.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Failed to call Telegram API: {0}")]
    Telegram(String),

    #[error("Failed to parse update payload: {0}")]
    Parse(String),
}

impl From<teloxide::RequestError> for RelayError {
    fn from(error: teloxide::RequestError) -> Self {
        RelayError::Telegram(error.to_string())
    }
}
