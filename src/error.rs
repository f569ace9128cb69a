//! Error types for the Twitter API client.

use thiserror::Error;

/// Errors surfaced by the Twitter API client.
#[derive(Error, Debug)]
pub enum TwitterError {
    /// HTTP request failed before a response was delivered
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Twitter API answered with a non-200 status.
    ///
    /// `message` and `code` carry the error Twitter reported; `code` is `0`
    /// when the API supplied only a bare error string (or no JSON at all).
    #[error("Twitter API error {status} (code {code}): {message}")]
    Api {
        status: u16,
        code: i32,
        message: String,
    },

    /// Response body decoded as JSON but did not have the expected shape
    #[error("unexpected response shape: {0}")]
    Decode(String),

    /// OAuth signature generation failed
    #[error("OAuth error: {0}")]
    OAuth(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for Twitter operations.
pub type TwitterResult<T> = Result<T, TwitterError>;
