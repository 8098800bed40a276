//! Disclosure ticket construction.

use chrono::{Duration, NaiveDate};
use scout_core::{DisclosureTicket, TicketStatus};

/// Statutory processing window: 10 calendar days from the end of the
/// project period.
const STATUTORY_WINDOW_DAYS: i64 = 10;

/// Render the fixed markdown request text.
fn build_request_text(
    agency: &str,
    project_title: &str,
    period_from: NaiveDate,
    period_to: NaiveDate,
) -> String {
    format!(
        "# 정보공개 청구서(초안)\n\
         기관: {agency}\n\
         사업명: {project_title}\n\
         기간: {period_from} ~ {period_to}\n\
         \n\
         청구 내용:\n\
         1) 평가결과 총괄표(평가항목·배점·위원별 점수 합산)\n\
         2) 우선협상대상자 선정사유 요약 또는 회의록(가능 범위 내)\n\
         3) 계약서(개인정보·영업비밀은 가림 처리된 부분공개 요청)\n\
         \n\
         청구 목적: 제안서 개선 및 이의신청 대비(법률상 정당한 목적)\n\
         비공개 우려: 관련 항목은 부분공개(마스킹) 처리 요청\n"
    )
}

/// Create a disclosure ticket for one project.
///
/// `due_date` is always `period_to` plus the 10-day statutory window. The
/// ticket gets a fresh unique id and the rendered request text; actual
/// submission and tracking belong to the caller.
#[must_use]
pub fn open_ticket(
    agency: &str,
    project_title: &str,
    period_from: NaiveDate,
    period_to: NaiveDate,
    portal_link: Option<&str>,
    status: TicketStatus,
) -> DisclosureTicket {
    DisclosureTicket {
        id: uuid::Uuid::new_v4().to_string(),
        agency: agency.to_string(),
        project_title: project_title.to_string(),
        period_from,
        period_to,
        status,
        request_text_md: build_request_text(agency, project_title, period_from, period_to),
        links: portal_link.map(ToString::to_string).into_iter().collect(),
        due_date: period_to + Duration::days(STATUTORY_WINDOW_DAYS),
    }
}
