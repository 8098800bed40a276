//! # scout-enrich
//!
//! Per-notice enrichment for Tenderscout:
//! - corpus-relative fit scoring through a [`scout_core::SimilarityIndex`]
//! - rule-based award/evaluation criteria extraction
//! - competitor mention detection
//! - proposal outline synthesis referencing fit-score reasons

pub mod award;
pub mod competitor;
pub mod fit;
pub mod proposal;

pub use award::extract_award_info;
pub use competitor::extract_competitors;
pub use fit::score_fit;
pub use proposal::make_proposal_outline;
