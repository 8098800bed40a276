//! Competitor mention detection.
//!
//! Pattern-matches company-name-like substrings (optional corporate-entity
//! marker, 2–30 character token, optional industry-suffix word) across the
//! notice body and any supplementary texts, normalizes them, and counts
//! mentions per name.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;
use scout_core::CompetitorMention;

/// Maximum entries in the result list.
const MAX_COMPETITORS: usize = 10;

fn company_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(주식회사|㈜)?\s?[가-힣A-Za-z0-9&.\- ]{2,30}(기술|정보|시스템|솔루션|랩|랩스|테크|컴퍼니)?")
            .expect("company regex must compile")
    })
}

/// Normalize a matched name: collapse whitespace, strip corporate-entity
/// markers and stray punctuation, upper-case.
#[must_use]
pub fn normalize_company(s: &str) -> String {
    let collapsed = s.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed
        .replace("주식회사", "")
        .replace('㈜', "")
        .trim_matches([' ', '(', ')', '·', ',', '.'])
        .to_uppercase()
}

/// Detect competitor mentions in a notice body plus supplementary texts.
///
/// Returns at most 10 entries, descending by mention count, ties broken by
/// first-seen order. Names shorter than 2 characters after normalization
/// are discarded.
#[must_use]
pub fn extract_competitors(notice_body: &str, extra_texts: &[String]) -> Vec<CompetitorMention> {
    let mut counts: HashMap<String, (u32, usize)> = HashMap::new();
    let mut next_seen = 0usize;

    for text in std::iter::once(notice_body).chain(extra_texts.iter().map(String::as_str)) {
        for m in company_re().find_iter(text) {
            let name = normalize_company(m.as_str());
            if name.chars().count() < 2 {
                continue;
            }
            let entry = counts.entry(name).or_insert_with(|| {
                let seen = next_seen;
                next_seen += 1;
                (0, seen)
            });
            entry.0 += 1;
        }
    }

    let mut ranked: Vec<(String, u32, usize)> = counts
        .into_iter()
        .map(|(name, (mentions, seen))| (name, mentions, seen))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.2.cmp(&b.2)));
    ranked
        .into_iter()
        .take(MAX_COMPETITORS)
        .map(|(name, mentions, _)| CompetitorMention { name, mentions })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn strips_entity_markers_and_uppercases() {
        assert_eq!(normalize_company("주식회사 한빛테크"), "한빛테크");
        assert_eq!(normalize_company("㈜ acme solutions"), "ACME SOLUTIONS");
        assert_eq!(normalize_company("  infotech  "), "INFOTECH");
    }

    #[test]
    fn counts_and_orders_by_mentions() {
        let body = "주식회사 한빛기술 수행, 한빛기술 참여. ㈜가온정보 참여";
        let mentions = extract_competitors(body, &[]);
        assert!(!mentions.is_empty());
        assert!(mentions[0].mentions >= mentions[mentions.len() - 1].mentions);
    }

    #[test]
    fn extra_texts_contribute_mentions() {
        let extra = vec!["주식회사 한빛기술".to_string()];
        let with_extra = extract_competitors("주식회사 한빛기술", &extra);
        let without = extract_competitors("주식회사 한빛기술", &[]);
        let count_of = |ms: &[CompetitorMention]| {
            ms.iter()
                .find(|m| m.name.contains("한빛기술"))
                .map_or(0, |m| m.mentions)
        };
        assert!(count_of(&with_extra) > count_of(&without));
    }

    #[test]
    fn never_more_than_ten_entries() {
        let body: String = (0..30)
            .map(|i| format!("주식회사 경쟁사{i:02}기술 참여. "))
            .collect();
        let mentions = extract_competitors(&body, &[]);
        assert!(mentions.len() <= 10);
    }

    #[test]
    fn short_names_discarded() {
        for m in extract_competitors("㈜ A 참여", &[]) {
            assert!(m.name.chars().count() >= 2);
        }
    }
}
