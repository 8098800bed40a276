//! General-web fallback adapter.
//!
//! Recall-maximizing fallback: same query augmentation as the portal
//! adapters but without a domain constraint. Whether its hits are
//! whitelist-filtered happens downstream at rank time, not here.

use scout_core::RawRecord;

use crate::error::SourceError;
use crate::search_api::SearchClient;

/// Query suffix for the unconstrained fallback search.
const FALLBACK_PHRASE: &str = "모집 공고 지원 사업";

/// Search the open web for notices matching `query`.
///
/// # Errors
///
/// Returns [`SourceError`] on missing credentials or transport failure. The
/// aggregation step downgrades either to an empty list so the fallback never
/// takes down a fetch.
pub async fn fetch_web(
    client: &SearchClient,
    query: &str,
    top_k: usize,
) -> Result<Vec<RawRecord>, SourceError> {
    let q = format!("{query} {FALLBACK_PHRASE}");
    let mut records = client.search(&q, top_k, None).await?;
    for r in &mut records {
        r.source = Some("web".to_string());
    }
    Ok(records)
}
