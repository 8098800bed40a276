//! Source adapter error types.
//!
//! Adapters return `Result<Vec<RawRecord>, SourceError>`; the aggregation
//! step logs errors and degrades them to empty lists, so no source failure
//! ever reaches the pipeline caller.

use thiserror::Error;

/// Errors that can occur when fetching from a notice source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// HTTP transport error (connect, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// Required credential is absent; the source is unavailable, not broken.
    #[error("missing credentials: {0}")]
    MissingCredentials(&'static str),

    /// Failed to make sense of a backend response.
    #[error("parse error: {0}")]
    Parse(String),

    /// Local corpus I/O failure.
    #[error("corpus I/O error: {0}")]
    Io(#[from] std::io::Error),
}
