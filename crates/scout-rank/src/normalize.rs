//! Raw record → canonical notice normalization.
//!
//! Two responsibilities: schema coercion (web-hit shapes onto [`Notice`]
//! fields, date strings parsed from the handful of formats sources actually
//! ship) and field extraction from free text (budget, agency, deadline,
//! required certifications via pattern matching). Extraction misses are
//! absent fields, never errors.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use scout_core::{Budget, Notice, NoticeSource, RawRecord};

fn budget_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(예산|사업비|추정\s*가격|계약\s*금액)\s*[:：\-]?\s*([0-9,]+)\s*(원|억원|천만|백만)?")
            .expect("budget regex must compile")
    })
}

fn agency_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(발주처|수요기관|주관기관)\s*[:：\-]?\s*([^\n\r]+)")
            .expect("agency regex must compile")
    })
}

fn deadline_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(접수\s*마감|제출\s*마감|마감)\s*[:：\-]?\s*([0-9]{4}[년.\-/]\s?[0-9]{1,2}[월.\-/]?\s?[0-9]{1,2})")
            .expect("deadline regex must compile")
    })
}

fn cert_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(GS\s*인증|ISO\s*9001|정보보안관리체계|ISMS|조달우수|성능인증|벤처인증)")
            .expect("cert regex must compile")
    })
}

/// Parse a date string in any of the shapes sources ship: `YYYY-MM-DD`,
/// `YYYY/MM/DD`, `YYYY.MM.DD`, ISO-with-time, or bare 8-digit `YYYYMMDD`.
/// Unparseable input is `None`, never an error.
#[must_use]
pub fn parse_notice_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    for fmt in ["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if s.len() == 8 && s.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(d) = NaiveDate::parse_from_str(s, "%Y%m%d") {
            return Some(d);
        }
    }
    None
}

/// Best-effort parse of a `Y-M-D` date with `.`/`/`/`-`/Korean-unit
/// separators collapsed to `-`.
fn parse_loose_date(s: &str) -> Option<NaiveDate> {
    let collapsed: String = s
        .chars()
        .map(|c| match c {
            '년' | '월' | '일' | '.' | '/' | ' ' => '-',
            other => other,
        })
        .collect();
    let parts: Vec<&str> = collapsed.split('-').filter(|p| !p.is_empty()).collect();
    if parts.len() != 3 {
        return None;
    }
    let y = parts[0].parse().ok()?;
    let m = parts[1].parse().ok()?;
    let d = parts[2].parse().ok()?;
    NaiveDate::from_ymd_opt(y, m, d)
}

/// Fields extracted from a notice body by pattern matching.
#[derive(Debug, Default)]
pub struct ExtractedFields {
    pub budget: Option<Budget>,
    pub agency: Option<String>,
    pub deadline: Option<NaiveDate>,
    pub required_certs: BTreeSet<String>,
}

/// Pattern-match budget, agency, deadline and required certifications out of
/// free text. Every miss is an absent field.
#[must_use]
pub fn extract_fields(text: &str) -> ExtractedFields {
    let budget = budget_re().captures(text).and_then(|c| {
        let amount: u64 = c.get(2)?.as_str().replace(',', "").parse().ok()?;
        Some(Budget {
            amount,
            unit: c.get(3).map_or_else(String::new, |m| m.as_str().to_string()),
        })
    });

    let agency = agency_re()
        .captures(text)
        .and_then(|c| c.get(2))
        .map(|m| m.as_str().trim().to_string())
        .filter(|a| !a.is_empty());

    let deadline = deadline_re()
        .captures(text)
        .and_then(|c| c.get(2))
        .and_then(|m| parse_loose_date(m.as_str()));

    let required_certs = cert_re()
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect();

    ExtractedFields {
        budget,
        agency,
        deadline,
        required_certs,
    }
}

/// Map one raw record onto the canonical notice shape.
///
/// Records without a URL have no identity and are dropped (`None`). Missing
/// titles fall back to a fixed placeholder; dates and extracted fields
/// degrade to absent values.
#[must_use]
pub fn normalize(raw: &RawRecord) -> Option<Notice> {
    let url = raw.url.as_deref().map(str::trim).unwrap_or_default();
    if url.is_empty() {
        return None;
    }

    let title = raw.title.as_deref().map(str::trim).unwrap_or_default();
    let title = if title.is_empty() { "무제 공고" } else { title };
    let source = NoticeSource::from_label(raw.source.as_deref().unwrap_or_default());

    let snippet = raw.snippet.as_deref().unwrap_or_default().trim().to_string();
    let body = raw.body.as_deref().unwrap_or_default().to_string();
    let extracted = extract_fields(&format!("{snippet}\n{body}"));

    let mut notice = Notice::new(title, url, source);
    notice.snippet = snippet;
    notice.body = body;
    notice.announce_date = raw.date.as_deref().and_then(parse_notice_date);
    notice.close_date = raw
        .deadline
        .as_deref()
        .and_then(parse_notice_date)
        .or(extracted.deadline);
    notice.budget = extracted.budget;
    notice.agency = raw
        .agency
        .as_deref()
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(String::from)
        .or(extracted.agency);
    notice.required_certs = extracted.required_certs;
    Some(notice)
}

/// Normalize a batch, dropping records whose URL is empty or already seen
/// (first occurrence wins).
#[must_use]
pub fn normalize_all(raws: &[RawRecord]) -> Vec<Notice> {
    let mut seen = BTreeSet::new();
    raws.iter()
        .filter_map(normalize)
        .filter(|n| seen.insert(n.url.clone()))
        .collect()
}

/// Cross-source merge dedup on the (title, url) pair, keeping first
/// occurrence. Catches the same URL re-fetched with an identical title from
/// two sources after per-source normalization.
#[must_use]
pub fn merge_dedup(notices: Vec<Notice>) -> Vec<Notice> {
    let mut seen = BTreeSet::new();
    notices
        .into_iter()
        .filter(|n| seen.insert((n.title.clone(), n.url.clone())))
        .collect()
}
