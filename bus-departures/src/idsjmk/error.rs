//! IDS JMK client error types.

use super::convert::ShapeError;

/// Longest slice of a response body kept in an error.
pub(crate) const MAX_ERROR_BODY_CHARS: usize = 500;

/// Errors from fetching and decoding a departure board.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status code
    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body was not the expected JSON
    #[error("JSON parse error: {message}{}", body_suffix(.body))]
    Json {
        message: String,
        body: Option<String>,
    },

    /// JSON decoded but did not have the assumed layout
    #[error("unexpected response shape: {0}")]
    Shape(#[from] ShapeError),

    /// Base URL could not be combined with the endpoint path
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Saved response could not be read from disk
    #[error("failed to read fixture {path}: {message}")]
    Fixture { path: String, message: String },
}

impl FetchError {
    /// Build a decode error, keeping the start of the body for diagnostics.
    pub(crate) fn json(err: serde_json::Error, body: &str) -> Self {
        FetchError::Json {
            message: err.to_string(),
            body: Some(body.chars().take(MAX_ERROR_BODY_CHARS).collect()),
        }
    }
}

fn body_suffix(body: &Option<String>) -> String {
    match body {
        Some(body) => format!(" (body: {body})"),
        None => String::new(),
    }
}
