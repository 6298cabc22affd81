use thiserror::Error;

/// Message shown for a blank query
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a question.";

/// Message shown for every failure past validation
pub const SEARCH_FAILED_MESSAGE: &str =
    "Failed to get a response. Please check your internet connection or try a different query.";

/// Errors produced by a search, from validation through response shaping.
///
/// Kept `Clone` so results can travel inside UI messages.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("query is empty")]
    Validation,

    /// Transport failure or non-success HTTP status.
    #[error("request failed: {0}")]
    Request(String),

    /// The body was not the JSON we expected.
    #[error("malformed response: {0}")]
    Decode(String),

    #[error("no answer was generated by the API")]
    EmptyAnswer,
}

impl SearchError {
    /// The single user-facing message for this error.
    ///
    /// Only validation gets its own text; the rest are indistinguishable to the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            SearchError::Validation => EMPTY_QUERY_MESSAGE,
            _ => SEARCH_FAILED_MESSAGE,
        }
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        SearchError::Request(err.to_string())
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        SearchError::Decode(err.to_string())
    }
}
