//! # scout-sources
//!
//! Source adapters for Tenderscout. Each adapter fetches raw, source-shaped
//! records for one backend:
//! - registered agency portals (domain-constrained search)
//! - general web fallback (unconstrained search)
//! - structured open-data bid API
//! - local markdown corpus
//!
//! Adapters fail independently: [`fetch_all`] fans out concurrently and
//! degrades any failing source to an empty list, so a single outage reduces
//! recall but never pipeline availability.

pub mod local;
pub mod open_data;
pub mod portals;
pub mod search_api;
pub mod web;

mod error;
mod http;

pub use error::SourceError;
pub use local::scan_corpus;
pub use open_data::OpenDataClient;
pub use portals::{PORTALS, Portal, fetch_portal};
pub use search_api::SearchClient;
pub use web::fetch_web;

use futures::future::join_all;
use scout_config::FetchConfig;
use scout_core::RawRecord;

/// Fetch from every network source concurrently and concatenate the results.
///
/// Individual source failures are logged and treated as empty results — one
/// failing source does not fail the fetch. Portal order in the output
/// follows the registry order, then web fallback, then open data.
pub async fn fetch_all(
    search: &SearchClient,
    open_data: &OpenDataClient,
    config: &FetchConfig,
    query: &str,
) -> Vec<RawRecord> {
    let portal_futures = PORTALS.iter().map(|p| fetch_portal(search, p, query));
    let (portal_results, web_result, bid_result) = tokio::join!(
        join_all(portal_futures),
        fetch_web(search, query, config.web_top_k),
        open_data.fetch_bids(query, config.open_data_top_k),
    );

    let unwrap_or_log =
        |result: Result<Vec<RawRecord>, SourceError>, source: &str| -> Vec<RawRecord> {
            result.unwrap_or_else(|e| {
                tracing::warn!(source, %e, "source fetch failed");
                Vec::new()
            })
        };

    let mut records = Vec::new();
    for (portal, result) in PORTALS.iter().zip(portal_results) {
        records.extend(unwrap_or_log(result, portal.id));
    }
    records.extend(unwrap_or_log(web_result, "web"));
    records.extend(unwrap_or_log(bid_result, "open-data"));
    records
}
