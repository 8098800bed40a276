//! Composite scoring and total ordering over a result set.
//!
//! score = 0.5·deadline + 0.3·keyword + 0.2·trust, corrected by a
//! government-domain bonus (+0.2) and a topic-hub demotion (−0.5), clamped
//! to [0, 1]. Sort order: ascending days-to-deadline (absent deadline sorts
//! last), then descending score, then descending trust — deadline urgency
//! dominates ties in relevance.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use scout_core::policy::{has_gov_bonus, is_topic_hub};
use scout_core::Notice;

const WEIGHT_DEADLINE: f64 = 0.5;
const WEIGHT_KEYWORD: f64 = 0.3;
const WEIGHT_TRUST: f64 = 0.2;

const GOV_BONUS: f64 = 0.2;
const TOPIC_HUB_PENALTY: f64 = 0.5;

/// Days-to-deadline horizon beyond which urgency is zero.
const DEADLINE_HORIZON_DAYS: i64 = 30;

/// Sort key stand-in for "no deadline": far future.
const NO_DEADLINE_DAYS: i64 = 9999;

fn token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\p{L}\p{N}]+").expect("token regex must compile"))
}

/// Days until `close_date`, with absence treated as far future (9999).
#[must_use]
pub fn days_until(close_date: Option<NaiveDate>, today: NaiveDate) -> i64 {
    close_date.map_or(NO_DEADLINE_DAYS, |d| (d - today).num_days())
}

/// 1.0 at or past the deadline, 0.0 at ≥30 days out or with no deadline,
/// linear in between. Monotonically non-increasing in days-until-deadline.
fn deadline_score(close_date: Option<NaiveDate>, today: NaiveDate) -> f64 {
    let days = days_until(close_date, today);
    if days <= 0 {
        return 1.0;
    }
    if days >= DEADLINE_HORIZON_DAYS {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let frac = days as f64 / DEADLINE_HORIZON_DAYS as f64;
    (1.0 - frac).max(0.0)
}

/// Unicode-aware keyword overlap: a query token found in the title counts 2,
/// snippet-only 1, normalized by 2×token-count and capped at 1.0. An empty
/// query scores 0.
fn keyword_score(query: &str, title: &str, snippet: &str) -> f64 {
    let query = query.to_lowercase();
    let tokens: Vec<&str> = token_re().find_iter(&query).map(|m| m.as_str()).collect();
    if tokens.is_empty() {
        return 0.0;
    }
    let title = title.to_lowercase();
    let snippet = snippet.to_lowercase();
    let mut hits = 0.0;
    for tok in &tokens {
        if title.contains(tok) {
            hits += 2.0;
        } else if snippet.contains(tok) {
            hits += 1.0;
        }
    }
    #[allow(clippy::cast_precision_loss)]
    let denom = (2 * tokens.len()) as f64;
    (hits / denom.max(1.0)).min(1.0)
}

/// Composite score for one notice against a query, as of `today`.
#[must_use]
pub fn score_item_at(notice: &Notice, query: &str, today: NaiveDate) -> f64 {
    let mut score = WEIGHT_DEADLINE * deadline_score(notice.close_date, today)
        + WEIGHT_KEYWORD * keyword_score(query, &notice.title, &notice.snippet)
        + WEIGHT_TRUST * notice.source.trust();

    if has_gov_bonus(&notice.url) {
        score += GOV_BONUS;
    }
    if is_topic_hub(&notice.url) {
        score -= TOPIC_HUB_PENALTY;
    }

    score.clamp(0.0, 1.0)
}

/// [`score_item_at`] as of the current local date.
#[must_use]
pub fn score_item(notice: &Notice, query: &str) -> f64 {
    score_item_at(notice, query, chrono::Local::now().date_naive())
}

/// Score every notice and sort into the final order: most urgent deadline
/// first, then score, then source trust.
#[must_use]
pub fn rank(mut notices: Vec<Notice>, query: &str) -> Vec<Notice> {
    let today = chrono::Local::now().date_naive();
    for n in &mut notices {
        // Keep 4 decimal places so rendered output stays stable.
        n.score = (score_item_at(n, query, today) * 10_000.0).round() / 10_000.0;
    }
    notices.sort_by(|a, b| {
        days_until(a.close_date, today)
            .cmp(&days_until(b.close_date, today))
            .then_with(|| b.score.total_cmp(&a.score))
            .then_with(|| b.source.trust().total_cmp(&a.source.trust()))
    });
    notices
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use scout_core::NoticeSource;

    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    const TODAY: (i32, u32, u32) = (2025, 8, 27);

    fn today() -> NaiveDate {
        day(TODAY.0, TODAY.1, TODAY.2)
    }

    #[rstest]
    #[case(Some((2025, 8, 27)), 1.0)] // today
    #[case(Some((2025, 8, 1)), 1.0)] // past
    #[case(Some((2025, 9, 26)), 0.0)] // 30 days out
    #[case(Some((2025, 12, 1)), 0.0)] // far future
    #[case(None, 0.0)] // absent
    fn deadline_score_boundaries(#[case] close: Option<(i32, u32, u32)>, #[case] expected: f64) {
        let close = close.map(|(y, m, d)| day(y, m, d));
        assert!((deadline_score(close, today()) - expected).abs() < 1e-9);
    }

    #[test]
    fn deadline_score_is_monotonic_in_days() {
        let mut prev = f64::INFINITY;
        for offset in 0..40 {
            let close = today() + chrono::Duration::days(offset);
            let s = deadline_score(Some(close), today());
            assert!(s <= prev, "score must not increase with more days");
            prev = s;
        }
    }

    #[test]
    fn keyword_score_weighs_title_over_snippet() {
        // Both tokens in title: 4/4 = 1.0
        assert!((keyword_score("관광 개발", "관광 상품 개발 공고", "") - 1.0).abs() < 1e-9);
        // One in title, one in snippet: 3/4
        assert!((keyword_score("관광 개발", "관광 지원", "개발 내용") - 0.75).abs() < 1e-9);
        // Empty query
        assert!((keyword_score("", "관광", "관광")).abs() < 1e-9);
    }

    #[test]
    fn keyword_score_tokenizes_hangul() {
        let s = keyword_score("빅데이터", "빅데이터 플랫폼 구축", "");
        assert!((s - 1.0).abs() < 1e-9);
    }

    #[test]
    fn score_stays_in_unit_interval() {
        // Gov bonus on top of a strong base must clamp at 1.0; hub penalty
        // below a weak base must clamp at 0.0.
        let mut strong = scout_core::Notice::new(
            "관광 공고",
            "https://www.g2b.go.kr/bid/1",
            NoticeSource::AgencyPortal,
        );
        strong.close_date = Some(today());
        let s = score_item_at(&strong, "관광 공고", today());
        assert!((0.0..=1.0).contains(&s));
        assert!((s - 1.0).abs() < 1e-9);

        let weak = scout_core::Notice::new(
            "무관한 글",
            "https://blog.example.com/tag/news",
            NoticeSource::Unknown,
        );
        let s = score_item_at(&weak, "관광", today());
        assert!((0.0..=1.0).contains(&s));
    }

    #[test]
    fn topic_hub_demoted_below_concrete_page() {
        let mut hub = scout_core::Notice::new(
            "관광 공고 목록",
            "https://www.nipa.kr/board/list",
            NoticeSource::AgencyPortal,
        );
        hub.close_date = Some(today() + chrono::Duration::days(5));
        let mut page = hub.clone();
        page.url = "https://www.nipa.kr/board/view?id=7".to_string();

        assert!(
            score_item_at(&page, "관광", today()) > score_item_at(&hub, "관광", today()),
            "hub page must rank below the concrete notice page"
        );
    }

    #[test]
    fn rank_orders_by_deadline_then_score_then_trust() {
        let mut urgent = scout_core::Notice::new(
            "마감 임박 공고",
            "https://a.go.kr/1",
            NoticeSource::GeneralWeb,
        );
        urgent.close_date = Some(chrono::Local::now().date_naive() + chrono::Duration::days(2));

        let mut later = scout_core::Notice::new(
            "여유 있는 공고",
            "https://b.go.kr/1",
            NoticeSource::AgencyPortal,
        );
        later.close_date = Some(chrono::Local::now().date_naive() + chrono::Duration::days(20));

        let undated =
            scout_core::Notice::new("마감 없는 공고", "https://c.go.kr/1", NoticeSource::AgencyPortal);

        let ranked = rank(vec![undated, later, urgent], "공고");
        assert_eq!(ranked[0].url, "https://a.go.kr/1");
        assert_eq!(ranked[1].url, "https://b.go.kr/1");
        // Absent deadline sorts after all dated entries regardless of score.
        assert_eq!(ranked[2].url, "https://c.go.kr/1");
        for n in &ranked {
            assert!((0.0..=1.0).contains(&n.score));
        }
    }
}
