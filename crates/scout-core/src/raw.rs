//! Source-shaped records before normalization.

use serde::{Deserialize, Serialize};

/// A record as returned by a source adapter, before normalization.
///
/// No invariants: every field is optional and the normalizer must tolerate
/// any combination of missing values. Adapters map their backend's response
/// fields onto this shape defensively — absent fields stay `None`, never
/// fail the fetch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
    /// Full document body, when the source has one (local corpus).
    #[serde(default)]
    pub body: Option<String>,
    /// Free-form source label (e.g. "nipa", "web", "pps.data.go.kr").
    #[serde(default)]
    pub source: Option<String>,
    /// Unparsed date string as the source shipped it.
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub agency: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl RawRecord {
    /// A record carrying only the common web-hit triple.
    #[must_use]
    pub fn web_hit(
        title: impl Into<String>,
        url: impl Into<String>,
        snippet: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            url: Some(url.into()),
            snippet: Some(snippet.into()),
            source: Some(source.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn deserializes_with_missing_fields() {
        let raw: RawRecord = serde_json::from_str(r#"{"url": "https://example.go.kr/n/1"}"#)
            .expect("partial record should deserialize");
        assert_eq!(raw.url.as_deref(), Some("https://example.go.kr/n/1"));
        assert!(raw.title.is_none());
        assert!(raw.deadline.is_none());
    }

    #[test]
    fn web_hit_sets_common_fields() {
        let raw = RawRecord::web_hit("t", "u", "s", "nipa");
        assert_eq!(raw.title.as_deref(), Some("t"));
        assert_eq!(raw.source.as_deref(), Some("nipa"));
        assert!(raw.body.is_none());
    }
}
