//! Allow/deny policy over source domains and noise keywords.
//!
//! Pure, total predicate functions over strings: malformed URLs never panic
//! or error, they just fail the predicate.

use url::Url;

/// Exact-host allow set: government and public-sector portals.
const ALLOW_HOSTS: &[&str] = &[
    "www.bizinfo.go.kr",
    "www.g2b.go.kr",
    "www.pps.go.kr",
    "www.korea.kr",
    "www.mois.go.kr",
    "www.mcst.go.kr",
    "www.kto.or.kr",
    "www.seoul.go.kr",
    "www.innopolis.or.kr",
    "www.nipa.kr",
    "www.iitp.kr",
    "www.keiti.re.kr",
    "www.kisa.or.kr",
    "www.mss.go.kr",
];

/// Public-sector host suffixes: government/municipality, public corporation,
/// public research institute.
const ALLOW_SUFFIXES: &[&str] = &[".go.kr", ".or.kr", ".re.kr"];

/// Job-board hosts, always denied regardless of the allow rules.
const DENY_HOSTS: &[&str] = &[
    "jobkorea.co.kr",
    "saramin.co.kr",
    "wanted.co.kr",
    "rocketpunch.com",
    "jobplanet.co.kr",
];

/// Recruitment-noise keywords. A notice whose text contains any of these is
/// treated as a job posting, not a procurement notice.
const JOB_KEYWORDS: &[&str] = &[
    "채용",
    "채용공고",
    "구인",
    "구직",
    "경력",
    "신입",
    "상시채용",
    "잡코리아",
    "사람인",
    "원티드",
    "로켓펀치",
    "잡플래닛",
];

/// URL path markers of aggregator/listing pages.
const TOPIC_MARKERS: &[&str] = &[
    "/tag/",
    "/topic/",
    "/hub/",
    "/section/",
    "/category/",
    "/tags/",
    "/검색",
    "/search",
    "/list",
    "/lists",
    "/board/list",
    "/news/list",
];

/// Host suffixes that earn the ranker's government bonus.
const GOV_BONUS_SUFFIXES: &[&str] = &[
    "nipa.kr",
    "bizinfo.go.kr",
    "k-startup.go.kr",
    "g2b.go.kr",
    "ntis.go.kr",
    "keit.re.kr",
    "keiti.re.kr",
];

fn host_of(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_lowercase))
}

/// True iff the URL's host is in the allow set or carries a public-sector
/// suffix. Deny-listed hosts are always rejected; malformed URLs return
/// `false`.
#[must_use]
pub fn is_allowed_domain(url: &str) -> bool {
    let Some(host) = host_of(url) else {
        return false;
    };
    if DENY_HOSTS.iter().any(|d| host.contains(d)) {
        return false;
    }
    ALLOW_HOSTS.contains(&host.as_str()) || ALLOW_SUFFIXES.iter().any(|s| host.ends_with(s))
}

/// True iff the text contains a recruitment-noise keyword.
#[must_use]
pub fn looks_like_job_posting(text: &str) -> bool {
    JOB_KEYWORDS.iter().any(|k| text.contains(k))
}

/// True iff the URL path looks like a tag/category/search listing page
/// rather than a concrete notice page.
#[must_use]
pub fn is_topic_hub(url: &str) -> bool {
    let url = url.to_lowercase();
    TOPIC_MARKERS.iter().any(|m| url.contains(m))
}

/// True iff the URL's host ends with a government-bonus domain.
#[must_use]
pub fn has_gov_bonus(url: &str) -> bool {
    host_of(url).is_some_and(|host| GOV_BONUS_SUFFIXES.iter().any(|d| host.ends_with(d)))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("https://www.nipa.kr/board/view?id=1", true)]
    #[case("https://www.bizinfo.go.kr/web/lay1/bbs/1.do", true)]
    #[case("https://seoul.go.kr/news/1", true)]
    #[case("https://www.kto.or.kr/notice/3", true)]
    #[case("https://www.keiti.re.kr/notice/3", true)]
    #[case("https://blog.example.com/post", false)]
    #[case("https://www.jobkorea.co.kr/recruit/1", false)]
    #[case("not a url", false)]
    #[case("", false)]
    fn allowed_domains(#[case] url: &str, #[case] expected: bool) {
        assert_eq!(is_allowed_domain(url), expected, "{url}");
    }

    #[test]
    fn deny_list_beats_suffix_rules() {
        // A job board under a public-sector-looking host stays denied.
        assert!(!is_allowed_domain("https://saramin.co.kr.go.kr/x"));
    }

    #[rstest]
    #[case("2024년 신입 개발자 채용 공고", true)]
    #[case("경력직 모집", true)]
    #[case("관광 상품 개발 지원사업 공고", false)]
    #[case("", false)]
    fn job_posting_detection(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(looks_like_job_posting(text), expected);
    }

    #[rstest]
    #[case("https://www.nipa.kr/board/list?page=2", true)]
    #[case("https://example.go.kr/tag/ai", true)]
    #[case("https://example.go.kr/search?q=x", true)]
    #[case("https://www.nipa.kr/notice/view/123", false)]
    fn topic_hub_detection(#[case] url: &str, #[case] expected: bool) {
        assert_eq!(is_topic_hub(url), expected);
    }

    #[test]
    fn gov_bonus_matches_host_suffix_only() {
        assert!(has_gov_bonus("https://www.g2b.go.kr/notice/1"));
        assert!(has_gov_bonus("https://sub.ntis.go.kr/a"));
        assert!(!has_gov_bonus("https://example.com/g2b.go.kr"));
    }
}
