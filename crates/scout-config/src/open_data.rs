//! Open-data procurement API configuration.

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://apis.data.go.kr/1230000/ad/BidPublicInfoService".to_string()
}

fn default_path() -> String {
    "/getBidPblancListInfoCnstwk".to_string()
}

const fn default_enabled() -> bool {
    true
}

/// Endpoint and credentials for the structured open-data bid API.
///
/// Field names on the wire differ per agency/version; the adapter maps them
/// defensively, so only the endpoint shape is configured here.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OpenDataConfig {
    /// Service key. Empty disables the adapter (it returns no results, not
    /// an error).
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Search API path under `base_url`.
    #[serde(default = "default_path")]
    pub path: String,

    /// Allows switching the source off without clearing the key.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl OpenDataConfig {
    /// Whether the adapter is enabled and has a usable key.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.enabled && !self.api_key.trim().is_empty()
    }
}

impl Default for OpenDataConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            path: default_path(),
            enabled: default_enabled(),
        }
    }
}
