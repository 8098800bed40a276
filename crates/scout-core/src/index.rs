//! Similarity-index contract used by the fit scorer.
//!
//! The index itself is a collaborator (see `scout-index` for the shipped
//! implementation); the fit scorer only depends on this trait. Within a run
//! the index is append-only and the add → save → search sequence is strictly
//! ordered by the pipeline.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by a similarity-index implementation.
#[derive(Debug, Error)]
pub enum IndexError {
    /// Embedding the text failed.
    #[error("embedding failed: {0}")]
    Embedding(String),

    /// Persisting or loading the index failed.
    #[error("index persistence failed: {0}")]
    Persistence(String),
}

/// One nearest-neighbor hit. `score` is a bounded similarity measure, higher
/// is more similar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub doc_id: String,
    pub score: f64,
}

/// Semantic similarity index over a document set.
pub trait SimilarityIndex {
    /// Add a document under `doc_id` with tag metadata.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::Embedding`] if the text cannot be embedded.
    fn add_document(&mut self, doc_id: &str, text: &str, tags: &[String])
    -> Result<(), IndexError>;

    /// Persist the index.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::Persistence`] on I/O failure.
    fn save(&self) -> Result<(), IndexError>;

    /// Return the `k` nearest documents to `query_text`, most similar first.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::Embedding`] if the query cannot be embedded.
    fn search(&mut self, query_text: &str, k: usize) -> Result<Vec<SearchHit>, IndexError>;
}
