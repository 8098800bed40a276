//! Fetch fan-out configuration.

use serde::{Deserialize, Serialize};

const fn default_web_top_k() -> usize {
    2
}

const fn default_open_data_top_k() -> usize {
    5
}

const fn default_corpus_limit() -> usize {
    50
}

const fn default_timeout_secs() -> u64 {
    20
}

fn default_docs_dir() -> String {
    "data/processed".to_string()
}

fn default_index_dir() -> String {
    ".tenderscout/index".to_string()
}

/// Per-source fetch limits and paths. Portal top-k defaults live with the
/// portal registry in `scout-sources`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FetchConfig {
    /// Result cap for the general-web fallback.
    #[serde(default = "default_web_top_k")]
    pub web_top_k: usize,

    /// Result cap for the open-data API.
    #[serde(default = "default_open_data_top_k")]
    pub open_data_top_k: usize,

    /// Result cap for the local corpus scan.
    #[serde(default = "default_corpus_limit")]
    pub corpus_limit: usize,

    /// Timeout applied to every network-facing adapter call.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Local document corpus directory (markdown files).
    #[serde(default = "default_docs_dir")]
    pub docs_dir: String,

    /// Similarity index directory.
    #[serde(default = "default_index_dir")]
    pub index_dir: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            web_top_k: default_web_top_k(),
            open_data_top_k: default_open_data_top_k(),
            corpus_limit: default_corpus_limit(),
            timeout_secs: default_timeout_secs(),
            docs_dir: default_docs_dir(),
            index_dir: default_index_dir(),
        }
    }
}
