//! # scout-core
//!
//! Core types and domain policy for Tenderscout.
//!
//! This crate provides the foundational types shared across all Tenderscout
//! crates:
//! - Canonical notice record and its source/trust model
//! - Raw, source-shaped records produced by adapters before normalization
//! - Enrichment result types (fit score, award info, competitors, proposal)
//! - Disclosure ticket entity with its statutory due-date rule
//! - Company profile and company document types
//! - Pure allow/deny predicates over source domains and noise keywords
//! - The similarity-index contract used by the fit scorer

pub mod company;
pub mod enrichment;
pub mod index;
pub mod notice;
pub mod policy;
pub mod raw;
pub mod ticket;

pub use company::{Capabilities, CompanyDoc, CompanyProfile, Strategy};
pub use enrichment::{AwardInfo, CompetitorMention, FitResult, ProposalOutline};
pub use index::{IndexError, SearchHit, SimilarityIndex};
pub use notice::{Budget, Notice, NoticeSource};
pub use raw::RawRecord;
pub use ticket::{DisclosureTicket, TicketStatus};
