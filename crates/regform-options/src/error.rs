//! Error types for the option loader.

use thiserror::Error;

/// Errors that can occur while loading the remote option list.
///
/// Every variant is recovered by substituting the embedded fallback list;
/// none is surfaced to the end user as an error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    /// Network request failed.
    #[error("network error: {0}")]
    Network(String),

    /// Endpoint answered with a non-success status.
    #[error("unexpected response status: {0}")]
    Status(u16),

    /// Response body did not match the expected record shape.
    #[error("response parse error: {0}")]
    Parse(String),

    /// The request did not complete before the configured deadline.
    #[error("request timed out after {0} ms")]
    Timeout(u64),
}

impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Result type alias for load operations.
pub type Result<T> = std::result::Result<T, LoadError>;
