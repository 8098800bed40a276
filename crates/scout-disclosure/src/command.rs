//! Disclosure command parsing: trigger detection and target selection over a
//! previously ranked result set.

use std::sync::OnceLock;

use regex::Regex;
use scout_core::{DisclosureTicket, Notice, TicketStatus};
use serde::Serialize;

use crate::ticket::open_ticket;

fn trigger_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)정보공개\s*청구서\s*생성").expect("trigger regex must compile")
    })
}

fn quoted_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#""([^"]+)""#).expect("quote regex must compile"))
}

/// True iff the text asks to create a disclosure request.
#[must_use]
pub fn is_disclosure_command(text: &str) -> bool {
    trigger_re().is_match(text)
}

/// Key phrase used to pick the target item: a quoted phrase if present,
/// otherwise the first 1–3 whitespace tokens of at least 2 characters.
fn target_key(user_text: &str) -> Option<String> {
    if let Some(c) = quoted_re().captures(user_text) {
        return Some(c[1].to_string());
    }
    let tokens: Vec<&str> = user_text
        .split_whitespace()
        .filter(|t| t.chars().count() >= 2)
        .take(3)
        .collect();
    if tokens.is_empty() {
        None
    } else {
        Some(tokens.join(" "))
    }
}

/// Pick the item the user refers to: case-insensitive containment of the
/// key phrase in title+agency, falling back to the top-ranked item. `None`
/// only for an empty result set.
#[must_use]
pub fn select_target<'a>(items: &'a [Notice], user_text: &str) -> Option<&'a Notice> {
    if items.is_empty() {
        return None;
    }
    if let Some(key) = target_key(user_text) {
        let key = key.to_lowercase();
        for item in items {
            let haystack = format!(
                "{} {}",
                item.title,
                item.agency.as_deref().unwrap_or_default()
            )
            .to_lowercase();
            if haystack.contains(&key) {
                return Some(item);
            }
        }
    }
    items.first()
}

/// Structured outcome of the disclosure command path. This is the only
/// pipeline path with an explicit failure flag: there is no sensible
/// degraded output when no target exists.
#[derive(Debug, Serialize)]
pub struct CommandReply {
    pub ok: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket: Option<DisclosureTicket>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_title: Option<String>,
}

/// Handle a disclosure command against a previously ranked result set.
///
/// The project period is taken from the target's close date (falling back
/// to today) on both ends, mirroring how the period is known at command
/// time.
#[must_use]
pub fn handle_command(user_text: &str, items: &[Notice]) -> CommandReply {
    let Some(target) = select_target(items, user_text) else {
        return CommandReply {
            ok: false,
            message: "생성할 대상을 찾지 못했습니다. 먼저 공고 검색/랭킹을 수행하세요."
                .to_string(),
            ticket: None,
            target_title: None,
        };
    };

    let period = target
        .close_date
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let ticket = open_ticket(
        target.agency.as_deref().unwrap_or_default(),
        &target.title,
        period,
        period,
        None,
        TicketStatus::Submitted,
    );

    CommandReply {
        ok: true,
        message: format!("정보공개 청구서 초안을 생성했습니다: {}", ticket.id),
        target_title: Some(target.title.clone()),
        ticket: Some(ticket),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use scout_core::NoticeSource;

    use super::*;

    #[rstest]
    #[case("정보공개 청구서 생성해줘", true)]
    #[case("정보공개청구서 생성", true)]
    #[case("공고 찾아줘", false)]
    #[case("", false)]
    fn trigger_detection(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(is_disclosure_command(text), expected);
    }

    fn items() -> Vec<Notice> {
        let mut first = Notice::new(
            "관광 플랫폼 구축 공고",
            "https://a.go.kr/1",
            NoticeSource::AgencyPortal,
        );
        first.agency = Some("한국관광공사".to_string());
        first.close_date = NaiveDate::from_ymd_opt(2025, 9, 30);

        let second = Notice::new(
            "스마트팜 지원 사업",
            "https://b.go.kr/2",
            NoticeSource::OpenData,
        );
        vec![first, second]
    }

    #[test]
    fn quoted_phrase_selects_matching_item() {
        let items = items();
        let target = select_target(&items, r#""스마트팜" 정보공개 청구서 생성"#).unwrap();
        assert_eq!(target.url, "https://b.go.kr/2");
    }

    #[test]
    fn leading_tokens_match_title_or_agency() {
        let items = items();
        let target = select_target(&items, "한국관광공사 정보공개 청구서 생성").unwrap();
        assert_eq!(target.url, "https://a.go.kr/1");
    }

    #[test]
    fn no_match_falls_back_to_top_ranked() {
        let items = items();
        let target = select_target(&items, "존재하지 않는 키워드").unwrap();
        assert_eq!(target.url, "https://a.go.kr/1");
    }

    #[test]
    fn empty_result_set_is_structured_failure() {
        let reply = handle_command("정보공개 청구서 생성", &[]);
        assert!(!reply.ok);
        assert!(reply.ticket.is_none());
        assert!(reply.message.contains("대상을 찾지 못했습니다"));
    }

    #[test]
    fn success_builds_ticket_from_close_date() {
        let reply = handle_command(r#""관광 플랫폼" 정보공개 청구서 생성"#, &items());
        assert!(reply.ok);
        let ticket = reply.ticket.unwrap();
        assert_eq!(ticket.agency, "한국관광공사");
        assert_eq!(ticket.period_to, NaiveDate::from_ymd_opt(2025, 9, 30).unwrap());
        assert_eq!(
            ticket.due_date,
            NaiveDate::from_ymd_opt(2025, 10, 10).unwrap()
        );
        assert_eq!(reply.target_title.as_deref(), Some("관광 플랫폼 구축 공고"));
    }
}
