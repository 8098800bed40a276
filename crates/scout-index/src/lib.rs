//! # scout-index
//!
//! Cosine-similarity document index implementing the
//! [`scout_core::SimilarityIndex`] contract.
//!
//! Documents are embedded on add, held in memory, and persisted as one JSON
//! document per line under the index directory (`docs.jsonl`). Within a run
//! the index is append-only; the fit-scoring pipeline drives the strict
//! add → save → search ordering.

pub mod embedder;

pub use embedder::{Embedder, EmbeddingEngine};

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use scout_core::{IndexError, SearchHit, SimilarityIndex};
use serde::{Deserialize, Serialize};

const DOCS_FILE: &str = "docs.jsonl";

#[derive(Debug, Serialize, Deserialize)]
struct IndexedDoc {
    doc_id: String,
    #[serde(default)]
    tags: Vec<String>,
    vector: Vec<f32>,
}

/// Cosine similarity in [-1, 1]; zero vectors score 0.
fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    f64::from(dot / (norm_a * norm_b))
}

/// In-memory vector index with JSONL persistence, generic over the
/// embedding backend.
pub struct VectorIndex<E: Embedder> {
    dir: PathBuf,
    embedder: E,
    docs: Vec<IndexedDoc>,
}

impl<E: Embedder> VectorIndex<E> {
    /// Open an index at `dir`, loading previously persisted documents if a
    /// `docs.jsonl` exists there.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::Persistence`] if an existing file cannot be
    /// read or a line cannot be parsed.
    pub fn open(dir: impl Into<PathBuf>, embedder: E) -> Result<Self, IndexError> {
        let dir = dir.into();
        let docs = load_docs(&dir.join(DOCS_FILE))?;
        Ok(Self {
            dir,
            embedder,
            docs,
        })
    }

    /// Number of indexed documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// Whether the index holds no documents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

fn load_docs(path: &Path) -> Result<Vec<IndexedDoc>, IndexError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let file = fs::File::open(path).map_err(|e| IndexError::Persistence(e.to_string()))?;
    let mut docs = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| IndexError::Persistence(e.to_string()))?;
        if line.trim().is_empty() {
            continue;
        }
        docs.push(
            serde_json::from_str(&line).map_err(|e| IndexError::Persistence(e.to_string()))?,
        );
    }
    Ok(docs)
}

impl<E: Embedder> SimilarityIndex for VectorIndex<E> {
    fn add_document(
        &mut self,
        doc_id: &str,
        text: &str,
        tags: &[String],
    ) -> Result<(), IndexError> {
        let vector = self.embedder.embed(text)?;
        self.docs.push(IndexedDoc {
            doc_id: doc_id.to_string(),
            tags: tags.to_vec(),
            vector,
        });
        Ok(())
    }

    fn save(&self) -> Result<(), IndexError> {
        fs::create_dir_all(&self.dir).map_err(|e| IndexError::Persistence(e.to_string()))?;
        let mut file = fs::File::create(self.dir.join(DOCS_FILE))
            .map_err(|e| IndexError::Persistence(e.to_string()))?;
        for doc in &self.docs {
            let line =
                serde_json::to_string(doc).map_err(|e| IndexError::Persistence(e.to_string()))?;
            writeln!(file, "{line}").map_err(|e| IndexError::Persistence(e.to_string()))?;
        }
        Ok(())
    }

    fn search(&mut self, query_text: &str, k: usize) -> Result<Vec<SearchHit>, IndexError> {
        let query = self.embedder.embed(query_text)?;
        let mut hits: Vec<SearchHit> = self
            .docs
            .iter()
            .map(|d| SearchHit {
                doc_id: d.doc_id.clone(),
                score: cosine_similarity(&query, &d.vector),
            })
            .collect();
        hits.sort_by(|a, b| b.score.total_cmp(&a.score));
        hits.truncate(k);
        Ok(hits)
    }
}
