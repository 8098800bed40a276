//! # scout-rank
//!
//! Normalization and ranking for Tenderscout:
//! - maps any raw record shape onto the canonical [`scout_core::Notice`],
//!   extracting budget, agency, deadline and certification fields from free
//!   text
//! - deduplicates across sources on the URL identity key
//! - computes the bounded composite score and the total order over a result
//!   set
//! - scores notices against a company profile (job-posting veto included)

pub mod normalize;
pub mod profile;
pub mod rank;

pub use normalize::{extract_fields, merge_dedup, normalize, normalize_all, parse_notice_date};
pub use profile::{rank_for_profile, score_notice};
pub use rank::{days_until, rank, score_item, score_item_at};
