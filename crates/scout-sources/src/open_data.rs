//! Structured open-data bid API adapter.
//!
//! The response schema differs per agency and API version, so fields are
//! mapped defensively off `serde_json::Value`: absent fields become `None`,
//! an unrecognized body shape becomes an empty item list, and only transport
//! or credential problems surface as errors (which the aggregation step then
//! downgrades to an empty list — callers cannot distinguish "no results"
//! from "adapter unavailable").

use scout_config::OpenDataConfig;
use scout_core::RawRecord;
use serde_json::Value;

use crate::error::SourceError;
use crate::http::check_response;

/// HTTP client for the open-data procurement API.
pub struct OpenDataClient {
    http: reqwest::Client,
    config: OpenDataConfig,
}

impl OpenDataClient {
    /// Create a client with the given config and per-request timeout.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(config: OpenDataConfig, timeout: std::time::Duration) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent("tenderscout/0.1")
                .timeout(timeout)
                .build()
                .expect("reqwest client should build"),
            config,
        }
    }

    /// Keyword-search bid notices, returning at most `top_k` records.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::MissingCredentials`] when no service key is
    /// configured, otherwise transport/status errors from the HTTP call.
    pub async fn fetch_bids(
        &self,
        query: &str,
        top_k: usize,
    ) -> Result<Vec<RawRecord>, SourceError> {
        if !self.config.is_configured() {
            return Err(SourceError::MissingCredentials("open_data.api_key"));
        }

        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), self.config.path);
        let page_size = top_k.clamp(1, 50).to_string();
        let resp = check_response(
            self.http
                .get(&url)
                .query(&[
                    ("serviceKey", self.config.api_key.as_str()),
                    ("keyword", query),
                    ("page", "1"),
                    ("pageSize", page_size.as_str()),
                ])
                .send()
                .await?,
        )
        .await?;

        let data: Value = resp
            .json()
            .await
            .map_err(|e| SourceError::Parse(e.to_string()))?;

        Ok(map_items(&data, top_k))
    }
}

/// Pull the item array out of either known response shape:
/// `{response:{body:{items:[...]}}}` or a flat `{items:[...]}`.
fn item_array(data: &Value) -> &[Value] {
    data.pointer("/response/body/items")
        .or_else(|| data.get("items"))
        .and_then(Value::as_array)
        .map_or(&[], Vec::as_slice)
}

/// First present string among `keys`.
fn str_field(item: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|k| item.get(*k).and_then(Value::as_str))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Map raw API items onto [`RawRecord`]s, capped at `top_k`.
fn map_items(data: &Value, top_k: usize) -> Vec<RawRecord> {
    item_array(data)
        .iter()
        .take(top_k)
        .map(|item| RawRecord {
            title: str_field(item, &["bidNtceNm", "title"]),
            url: str_field(item, &["bidNtceDetailUrl", "url"]),
            date: str_field(item, &["ntceStartDt", "published_at"]),
            deadline: str_field(item, &["ntceEndDt", "closingDt"]),
            agency: str_field(item, &["ntceInsttNm", "agency"]),
            category: str_field(item, &["bidClsfcNoNm", "category"]),
            source: Some("pps.data.go.kr".to_string()),
            ..RawRecord::default()
        })
        .collect()
}
