//! Proposal outline synthesis.

use scout_core::{AwardInfo, Notice, ProposalOutline};

/// Fixed section order for a public-sector proposal.
const BASE_OUTLINE: &[&str] = &[
    "표지/요약",
    "사업이해 및 문제정의",
    "수행 범위와 일정(WBS, 간트)",
    "기술/데이터 아키텍처",
    "조직/역할/PM 계획",
    "유사실적 및 레퍼런스",
    "예산 및 산출물",
    "위험관리 및 품질보증(QA)",
];

const BASE_ATTACHMENTS: &[&str] = &[
    "사업자등록증",
    "재무제표/신용평가",
    "유사실적 증빙",
    "개인정보/보안서약",
];

/// Extra attachment required when past performance weighs heavily.
const PERFORMANCE_ATTACHMENT: &str = "실적증명원(발주처 직인)";

/// Past-performance weight at or above which the extra attachment is
/// required.
const PERFORMANCE_WEIGHT_THRESHOLD: u32 = 30;

/// Fallback tip when no fit-score reasons are available.
const GENERIC_STRENGTH_TIP: &str = "RAG 근거 정리";

/// Synthesize a proposal outline for one notice.
///
/// The section list is fixed. Attachments extend with a sealed performance
/// certificate when the award info weighs past performance (유사실적) at 30
/// or more. Tips reference the first three fit-score reasons verbatim, or a
/// generic placeholder when none exist.
#[must_use]
pub fn make_proposal_outline(
    _notice: &Notice,
    award_info: &AwardInfo,
    fit_reasons: &[String],
) -> ProposalOutline {
    let mut must_attachments: Vec<String> =
        BASE_ATTACHMENTS.iter().map(ToString::to_string).collect();
    if award_info
        .weights
        .get("유사실적")
        .is_some_and(|w| *w >= PERFORMANCE_WEIGHT_THRESHOLD)
    {
        must_attachments.push(PERFORMANCE_ATTACHMENT.to_string());
    }

    let strengths = if fit_reasons.is_empty() {
        GENERIC_STRENGTH_TIP.to_string()
    } else {
        fit_reasons
            .iter()
            .take(3)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    };

    ProposalOutline {
        sections: BASE_OUTLINE.iter().map(ToString::to_string).collect(),
        must_attachments,
        tips: vec![
            "평가항목-배점표에 맞춰 장 제목을 동일 용어로 매핑".to_string(),
            format!("우리 강점 근거: {strengths}"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use scout_core::NoticeSource;

    use super::*;

    fn notice() -> Notice {
        Notice::new("공고", "https://x.go.kr/1", NoticeSource::AgencyPortal)
    }

    #[test]
    fn outline_has_eight_fixed_sections() {
        let outline = make_proposal_outline(&notice(), &AwardInfo::default(), &[]);
        assert_eq!(outline.sections.len(), 8);
        assert_eq!(outline.sections[0], "표지/요약");
    }

    #[test]
    fn heavy_performance_weight_adds_attachment() {
        let mut award = AwardInfo::default();
        award.weights.insert("유사실적".to_string(), 30);
        let outline = make_proposal_outline(&notice(), &award, &[]);
        assert!(
            outline
                .must_attachments
                .contains(&PERFORMANCE_ATTACHMENT.to_string())
        );

        award.weights.insert("유사실적".to_string(), 20);
        let outline = make_proposal_outline(&notice(), &award, &[]);
        assert!(
            !outline
                .must_attachments
                .contains(&PERFORMANCE_ATTACHMENT.to_string())
        );
    }

    #[test]
    fn tips_quote_first_three_reasons() {
        let reasons = vec![
            "a:0.900".to_string(),
            "b:0.800".to_string(),
            "c:0.700".to_string(),
            "d:0.600".to_string(),
        ];
        let outline = make_proposal_outline(&notice(), &AwardInfo::default(), &reasons);
        assert_eq!(outline.tips[1], "우리 강점 근거: a:0.900, b:0.800, c:0.700");
    }

    #[test]
    fn no_reasons_falls_back_to_placeholder() {
        let outline = make_proposal_outline(&notice(), &AwardInfo::default(), &[]);
        assert_eq!(outline.tips[1], "우리 강점 근거: RAG 근거 정리");
    }
}
