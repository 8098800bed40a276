//! Canonical notice record and its source/trust model.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Origin of a notice, with a fixed trust constant per variant.
///
/// Trust ordering is deliberate: agency-scoped portals outrank the open-data
/// API, which outranks the general web. Sources the normalizer cannot place
/// get [`NoticeSource::Unknown`] and the neutral 0.5 trust.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NoticeSource {
    /// Agency-scoped portal search (e.g. NIPA, Bizinfo).
    AgencyPortal,
    /// General web fallback search.
    GeneralWeb,
    /// Structured open-data procurement API.
    OpenData,
    /// Local document corpus.
    LocalCorpus,
    /// Source label not recognized.
    Unknown,
}

impl NoticeSource {
    /// Infer a source from a free-form label by substring match.
    ///
    /// Unrecognized labels map to [`NoticeSource::GeneralWeb`] when the label
    /// is explicitly "web", otherwise [`NoticeSource::Unknown`].
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let label = label.trim().to_lowercase();
        if label.is_empty() {
            return Self::Unknown;
        }
        if label.contains("nipa") || label.contains("bizinfo") || label.contains("portal") {
            return Self::AgencyPortal;
        }
        if label.contains("pps") || label.contains("data.go.kr") || label.contains("open-data") {
            return Self::OpenData;
        }
        if label.contains("local") {
            return Self::LocalCorpus;
        }
        if label.contains("web") {
            return Self::GeneralWeb;
        }
        Self::Unknown
    }

    /// Fixed per-source trust weight used by the ranker.
    #[must_use]
    pub const fn trust(self) -> f64 {
        match self {
            Self::AgencyPortal => 1.0,
            Self::OpenData => 0.8,
            Self::LocalCorpus => 0.7,
            Self::GeneralWeb => 0.6,
            Self::Unknown => 0.5,
        }
    }
}

/// Structured budget amount extracted from notice text.
///
/// `amount` is the comma-stripped digit run; `unit` carries the unit word
/// that followed it (원, 억원, 천만, 백만) when one was present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    pub amount: u64,
    #[serde(default)]
    pub unit: String,
}

impl std::fmt::Display for Budget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.amount, self.unit)
    }
}

/// Canonical record describing a single procurement/grant announcement.
///
/// Produced by the normalizer, scored by the ranker. `url` is the identity
/// key: non-empty and unique within a result set after deduplication.
/// `score` is in `[0, 1]` once ranked and is written only by the ranker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub url: String,
    pub source: NoticeSource,
    #[serde(default)]
    pub agency: Option<String>,
    #[serde(default)]
    pub announce_date: Option<NaiveDate>,
    #[serde(default)]
    pub close_date: Option<NaiveDate>,
    #[serde(default)]
    pub budget: Option<Budget>,
    /// Free-text excerpt from the source.
    #[serde(default)]
    pub snippet: String,
    /// Full body text when a source provides one; empty otherwise.
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub required_certs: BTreeSet<String>,
    #[serde(default = "default_content_type")]
    pub content_type: String,
    #[serde(default)]
    pub score: f64,
}

fn default_content_type() -> String {
    "notice".to_string()
}

impl Notice {
    /// A bare notice with identity fields set and everything else defaulted.
    #[must_use]
    pub fn new(title: impl Into<String>, url: impl Into<String>, source: NoticeSource) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            source,
            agency: None,
            announce_date: None,
            close_date: None,
            budget: None,
            snippet: String::new(),
            body: String::new(),
            required_certs: BTreeSet::new(),
            content_type: default_content_type(),
            score: 0.0,
        }
    }

    /// Title and snippet joined for keyword-level matching.
    #[must_use]
    pub fn searchable_text(&self) -> String {
        format!("{} {}", self.title, self.snippet)
    }
}
