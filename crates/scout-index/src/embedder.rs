//! Embedding backends.
//!
//! The index is generic over [`Embedder`] so tests can run with a cheap
//! deterministic backend while production uses fastembed (ONNX runtime,
//! no external API keys).

use fastembed::{EmbeddingModel, TextEmbedding, TextInitOptions};
use scout_core::IndexError;

/// Turns text into a fixed-dimensional vector.
pub trait Embedder {
    /// Embed a single text.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::Embedding`] if inference fails.
    fn embed(&mut self, text: &str) -> Result<Vec<f32>, IndexError>;
}

/// Local embedding engine backed by fastembed.
///
/// Uses `AllMiniLML6V2` (384-dimensional, mean pooling). Model files are
/// downloaded on first use and cached at `~/.tenderscout/cache/fastembed/`.
///
/// The ONNX runtime is synchronous; from async code wrap calls in
/// `tokio::task::spawn_blocking`.
pub struct EmbeddingEngine {
    model: TextEmbedding,
}

impl EmbeddingEngine {
    /// Create an engine, downloading the model on first run (~80MB).
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::Embedding`] if model download or ONNX
    /// initialization fails.
    pub fn new() -> Result<Self, IndexError> {
        let cache_dir = dirs::home_dir().map_or_else(
            || std::path::PathBuf::from(".fastembed_cache"),
            |h| h.join(".tenderscout").join("cache").join("fastembed"),
        );

        let model = TextEmbedding::try_new(
            TextInitOptions::new(EmbeddingModel::AllMiniLML6V2)
                .with_cache_dir(cache_dir)
                .with_show_download_progress(false),
        )
        .map_err(|e| IndexError::Embedding(e.to_string()))?;

        Ok(Self { model })
    }

    /// Embedding vector dimensionality (always 384 for `AllMiniLML6V2`).
    #[must_use]
    pub const fn dimension() -> usize {
        384
    }
}

impl Embedder for EmbeddingEngine {
    fn embed(&mut self, text: &str) -> Result<Vec<f32>, IndexError> {
        let mut vectors = self
            .model
            .embed(vec![text.to_string()], None)
            .map_err(|e| IndexError::Embedding(e.to_string()))?;
        vectors
            .pop()
            .ok_or_else(|| IndexError::Embedding("empty result from embedding model".to_string()))
    }
}
