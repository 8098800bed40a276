//! Web search API client (Tavily-style).
//!
//! One POST endpoint serves both the agency-portal adapters (with
//! `include_domains` constraints) and the general-web fallback. Response
//! fields are mapped onto [`RawRecord`] defensively; the search result
//! schema only guarantees `{title, url, content}`.

use scout_config::SearchApiConfig;
use scout_core::RawRecord;
use serde::{Deserialize, Serialize};

use crate::error::SourceError;
use crate::http::check_response;

#[derive(Serialize)]
struct SearchRequest<'a> {
    api_key: &'a str,
    query: &'a str,
    max_results: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    include_domains: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exclude_domains: Option<&'a [String]>,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Deserialize)]
struct SearchResult {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    published_date: Option<String>,
}

/// HTTP client for the web search API.
pub struct SearchClient {
    http: reqwest::Client,
    config: SearchApiConfig,
}

impl SearchClient {
    /// Create a client with the given config and per-request timeout.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(config: SearchApiConfig, timeout: std::time::Duration) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent("tenderscout/0.1")
                .timeout(timeout)
                .build()
                .expect("reqwest client should build"),
            config,
        }
    }

    /// Run a search, optionally constrained to `include_domains`.
    ///
    /// Empty results are an `Ok(vec![])`, never an error. A missing API key
    /// is [`SourceError::MissingCredentials`], which the aggregation step
    /// downgrades to an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] on missing credentials, transport failure, a
    /// non-success status, or an unparseable response body.
    pub async fn search(
        &self,
        query: &str,
        top_k: usize,
        include_domains: Option<&[String]>,
    ) -> Result<Vec<RawRecord>, SourceError> {
        if !self.config.is_configured() {
            return Err(SourceError::MissingCredentials("search.api_key"));
        }

        let request = SearchRequest {
            api_key: &self.config.api_key,
            query,
            max_results: top_k,
            include_domains,
            exclude_domains: None,
        };
        let resp = check_response(
            self.http
                .post(&self.config.base_url)
                .json(&request)
                .send()
                .await?,
        )
        .await?;

        let data: SearchResponse = resp
            .json()
            .await
            .map_err(|e| SourceError::Parse(e.to_string()))?;

        Ok(data
            .results
            .into_iter()
            .map(|r| RawRecord {
                title: r.title,
                url: r.url,
                snippet: r.content,
                date: r.published_date,
                ..RawRecord::default()
            })
            .collect())
    }
}
