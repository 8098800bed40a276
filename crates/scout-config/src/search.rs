//! Web search API configuration.

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://api.tavily.com/search".to_string()
}

/// Credentials and endpoint for the web search API used by the portal and
/// general-web adapters.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchApiConfig {
    /// API key. Empty means the search adapters report missing credentials
    /// and the pipeline degrades to the remaining sources.
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl SearchApiConfig {
    /// Whether a usable API key is present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

impl Default for SearchApiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
        }
    }
}
