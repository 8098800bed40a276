//! Rule-based award/evaluation criteria extraction.
//!
//! Not a full parse: the presence of evaluation markers in the notice text
//! triggers a fixed default criteria list with a partial weight assignment.
//! Without markers the criteria stay empty, but budget and agency are still
//! surfaced from the notice metadata.

use scout_core::{AwardInfo, Notice};

/// Markers that indicate an evaluation/scoring section.
const AWARD_MARKERS: &[&str] = &["배점", "평가항목"];

/// Default criteria assumed for a standard public evaluation table.
const DEFAULT_CRITERIA: &[&str] = &["사업이해도", "수행계획", "인력/조직", "유사실적"];

/// Partial weight assignment; the remaining criteria stay unweighted.
const DEFAULT_WEIGHTS: &[(&str, u32)] = &[("수행계획", 40), ("유사실적", 30)];

/// Extract award info from a notice.
#[must_use]
pub fn extract_award_info(notice: &Notice) -> AwardInfo {
    let mut info = AwardInfo {
        budget: notice.budget.clone(),
        agency: notice.agency.clone(),
        ..AwardInfo::default()
    };

    let text = format!("{}\n{}", notice.snippet, notice.body);
    if AWARD_MARKERS.iter().any(|m| text.contains(m)) {
        info.criteria
            .extend(DEFAULT_CRITERIA.iter().map(ToString::to_string));
        info.weights.extend(
            DEFAULT_WEIGHTS
                .iter()
                .map(|(k, v)| ((*k).to_string(), *v)),
        );
    }
    info
}
