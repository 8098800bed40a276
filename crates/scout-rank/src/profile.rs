//! Profile-aware notice scoring.
//!
//! Unlike the query-relative composite score, this variant measures how well
//! a notice fits a specific company: capability keyword matches,
//! certification overlap, metadata confidence, target agencies. A notice
//! that looks like a job posting is hard-vetoed to 0.0 before any other
//! signal is considered.

use scout_core::policy::looks_like_job_posting;
use scout_core::{CompanyProfile, Notice};

const KEYWORD_MATCH: f64 = 1.5;
const CERT_MATCH: f64 = 2.0;
const CERT_GAP: f64 = -1.0;
const DEADLINE_PRESENT: f64 = 0.8;
const DEADLINE_ABSENT: f64 = -0.5;
const BUDGET_PRESENT: f64 = 0.5;
const BUDGET_ABSENT: f64 = -0.2;
const TARGET_AGENCY: f64 = 1.0;

/// Score a notice against a company profile. Never negative; exactly 0.0
/// for anything the job-posting veto catches.
#[must_use]
pub fn score_notice(notice: &Notice, company: &CompanyProfile) -> f64 {
    let text = notice.searchable_text();
    if looks_like_job_posting(&text) {
        return 0.0;
    }

    let text = text.to_lowercase();
    let mut score = 0.0;

    for term in company.match_terms() {
        if text.contains(&term.to_lowercase()) {
            score += KEYWORD_MATCH;
        }
    }

    // Substring-tolerant certification overlap, either direction.
    let required: Vec<String> = notice
        .required_certs
        .iter()
        .map(|c| c.to_lowercase())
        .collect();
    if !required.is_empty() {
        let held: Vec<String> = company
            .capabilities
            .certs
            .iter()
            .map(|c| c.to_lowercase())
            .collect();
        let matched = required
            .iter()
            .any(|r| held.iter().any(|h| r.contains(h.as_str()) || h.contains(r.as_str())));
        score += if matched { CERT_MATCH } else { CERT_GAP };
    }

    score += if notice.close_date.is_some() {
        DEADLINE_PRESENT
    } else {
        DEADLINE_ABSENT
    };
    score += if notice.budget.is_some() {
        BUDGET_PRESENT
    } else {
        BUDGET_ABSENT
    };

    if let Some(agency) = &notice.agency {
        let agency = agency.to_lowercase();
        if company
            .strategy
            .target_agencies
            .iter()
            .any(|t| t.to_lowercase() == agency)
        {
            score += TARGET_AGENCY;
        }
    }

    score.max(0.0)
}

/// Score, drop zero-fit notices, and return the best `top_k` descending.
#[must_use]
pub fn rank_for_profile(
    notices: Vec<Notice>,
    company: &CompanyProfile,
    top_k: usize,
) -> Vec<Notice> {
    let mut scored: Vec<Notice> = notices
        .into_iter()
        .map(|mut n| {
            n.score = score_notice(&n, company);
            n
        })
        .filter(|n| n.score > 0.0)
        .collect();
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(top_k);
    scored
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use scout_core::{Budget, Capabilities, NoticeSource, Strategy};

    use super::*;

    fn company() -> CompanyProfile {
        CompanyProfile {
            company_name: "예시기술".to_string(),
            keywords: vec!["관광".to_string()],
            capabilities: Capabilities {
                domains: vec!["빅데이터".to_string()],
                solutions: vec![],
                certs: vec!["GS인증".to_string()],
            },
            strategy: Strategy {
                target_agencies: vec!["한국관광공사".to_string()],
            },
        }
    }

    #[test]
    fn job_posting_vetoed_to_zero() {
        let mut notice = scout_core::Notice::new(
            "채용 공고",
            "https://www.nipa.kr/n/1",
            NoticeSource::AgencyPortal,
        );
        // Even with an urgent deadline and matched keywords, veto wins.
        notice.close_date = NaiveDate::from_ymd_opt(2025, 8, 28);
        notice.snippet = "관광 빅데이터 경력 채용".to_string();
        assert!((score_notice(&notice, &company()) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn accumulates_keyword_cert_and_metadata_signals() {
        let mut notice = scout_core::Notice::new(
            "관광 빅데이터 플랫폼 구축",
            "https://www.kto.or.kr/n/1",
            NoticeSource::AgencyPortal,
        );
        notice.close_date = NaiveDate::from_ymd_opt(2025, 9, 30);
        notice.budget = Some(Budget {
            amount: 100_000_000,
            unit: "원".to_string(),
        });
        notice.required_certs.insert("GS 인증".to_string());
        notice.agency = Some("한국관광공사".to_string());

        // "GS 인증" and held "GS인증" differ by a space: neither contains
        // the other, so the cert gap penalty applies.
        let score = score_notice(&notice, &company());
        let expected = 1.5 + 1.5 - 1.0 + 0.8 + 0.5 + 1.0;
        assert!((score - expected).abs() < 1e-9, "got {score}");
    }

    #[test]
    fn cert_overlap_is_substring_tolerant() {
        let mut notice = scout_core::Notice::new(
            "관광 공고",
            "https://www.kto.or.kr/n/2",
            NoticeSource::AgencyPortal,
        );
        notice.required_certs.insert("GS인증 1등급".to_string());
        let score = score_notice(&notice, &company());
        // required "gs인증 1등급" contains held "gs인증": +2.0. Keywords:
        // "관광" matches (+1.5). No deadline (−0.5), no budget (−0.2).
        let expected = 1.5 + 2.0 - 0.5 - 0.2;
        assert!((score - expected).abs() < 1e-9, "got {score}");
    }

    #[test]
    fn floor_at_zero() {
        let notice = scout_core::Notice::new(
            "무관한 공고",
            "https://somewhere.go.kr/n/1",
            NoticeSource::GeneralWeb,
        );
        assert!((score_notice(&notice, &company()) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rank_for_profile_filters_and_caps() {
        let mut fit = scout_core::Notice::new(
            "관광 빅데이터 사업",
            "https://a.go.kr/1",
            NoticeSource::AgencyPortal,
        );
        fit.close_date = NaiveDate::from_ymd_opt(2025, 9, 1);
        let job = scout_core::Notice::new("신입 채용", "https://b.go.kr/1", NoticeSource::GeneralWeb);
        let unrelated =
            scout_core::Notice::new("무관한 글", "https://c.go.kr/1", NoticeSource::GeneralWeb);

        let ranked = rank_for_profile(vec![job, unrelated, fit], &company(), 5);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].url, "https://a.go.kr/1");
        assert!(ranked[0].score > 0.0);
    }
}
