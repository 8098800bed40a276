//! Agency-scoped portal adapters.
//!
//! Each registered portal is searched with a fixed boosting phrase
//! (announcement/recruitment/support terms) and a domain constraint, which
//! together keep results on concrete notice pages of that portal.

use scout_core::RawRecord;

use crate::error::SourceError;
use crate::search_api::SearchClient;

/// Query suffix that surfaces announcement-type documents first.
const BOOST_PHRASE: &str = "공고 모집 지원";

/// One registered agency portal.
#[derive(Debug, Clone, Copy)]
pub struct Portal {
    /// Short source label (becomes the `source` field on fetched records).
    pub id: &'static str,
    /// Domain the search is constrained to.
    pub domain: &'static str,
    /// Default result cap for this portal.
    pub top_k: usize,
}

/// Registered portals, searched on every fetch fan-out.
pub const PORTALS: &[Portal] = &[
    Portal {
        id: "nipa",
        domain: "nipa.kr",
        top_k: 3,
    },
    Portal {
        id: "bizinfo",
        domain: "bizinfo.go.kr",
        top_k: 2,
    },
];

/// Build the augmented query for one portal.
#[must_use]
pub fn portal_query(portal: &Portal, query: &str) -> String {
    format!("{query} {BOOST_PHRASE} site:{}", portal.domain)
}

/// Search one portal's domain for notices matching `query`.
///
/// # Errors
///
/// Returns [`SourceError`] when the underlying search call fails; the
/// aggregation step isolates this per portal.
pub async fn fetch_portal(
    client: &SearchClient,
    portal: &Portal,
    query: &str,
) -> Result<Vec<RawRecord>, SourceError> {
    let q = portal_query(portal, query);
    let domains = [portal.domain.to_string()];
    let mut records = client.search(&q, portal.top_k, Some(&domains)).await?;
    for r in &mut records {
        r.source = Some(portal.id.to_string());
    }
    Ok(records)
}
