//! Result types produced by the fit scorer and the enrichment stage.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::notice::Budget;

/// Corpus-relative relevance of one notice to a company's document set.
///
/// `score` is unbounded non-negative and only comparable within a single run
/// (it depends on what was indexed). `reasons` lists the top matching
/// documents as `"doc-id:score"` strings, most relevant first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitResult {
    /// Identity of the scored notice (its URL).
    pub notice_url: String,
    pub score: f64,
    #[serde(default)]
    pub reasons: Vec<String>,
}

/// Award/evaluation criteria extracted from a notice body.
///
/// Extraction is rule-based and partial: `weights` need not cover every
/// criterion nor sum to 100. `budget` and `agency` are carried over from the
/// notice metadata even when no criteria were found.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AwardInfo {
    #[serde(default)]
    pub criteria: Vec<String>,
    #[serde(default)]
    pub weights: BTreeMap<String, u32>,
    #[serde(default)]
    pub budget: Option<Budget>,
    #[serde(default)]
    pub agency: Option<String>,
}

/// One competitor detected in notice text, with its mention count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitorMention {
    /// Normalized company name (entity markers stripped, upper-cased).
    pub name: String,
    pub mentions: u32,
}

/// Proposal outline synthesized for one notice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposalOutline {
    /// Fixed ordered section list.
    pub sections: Vec<String>,
    /// Base attachment list, conditionally extended.
    pub must_attachments: Vec<String>,
    /// Derived hints, including top fit-score reasons.
    pub tips: Vec<String>,
}
