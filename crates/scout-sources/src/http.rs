//! Shared HTTP response helper for source adapters.
//!
//! Centralizes the status-code check (non-success → [`SourceError::Api`]) so
//! individual adapters stay focused on request construction and response
//! mapping.

use crate::error::SourceError;

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success, otherwise a
/// [`SourceError::Api`] carrying the status code and response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, SourceError> {
    if !resp.status().is_success() {
        return Err(SourceError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}
