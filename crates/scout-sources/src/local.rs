//! Local document corpus adapter.
//!
//! Scans a directory of markdown files, derives a title from the first
//! heading line (or the filename), and scores documents by raw
//! token-occurrence count against the query. An empty query returns the
//! corpus unscored, capped at the limit.

use std::fs;
use std::path::Path;

use scout_core::RawRecord;

use crate::error::SourceError;

/// Length cap for the snippet excerpt derived from a document body.
const SNIPPET_CHARS: usize = 200;

fn title_of(text: &str, stem: &str) -> String {
    let first_line = text.lines().next().unwrap_or_default().trim();
    let title = first_line.strip_prefix('#').map_or(first_line, str::trim);
    if title.is_empty() {
        stem.to_string()
    } else {
        title.to_string()
    }
}

fn snippet_of(text: &str) -> String {
    text.chars().take(SNIPPET_CHARS).collect()
}

/// Summed occurrence count of the query's whitespace tokens in `haystack`.
fn occurrence_score(haystack: &str, query: &str) -> usize {
    let haystack = haystack.to_lowercase();
    query
        .split_whitespace()
        .map(|tok| haystack.matches(&tok.to_lowercase()).count())
        .sum()
}

/// Scan `docs_dir` for markdown documents matching `query`.
///
/// A missing directory is an empty corpus, not an error. With a non-empty
/// query only documents with at least one token occurrence are returned,
/// best first; an empty query returns up to `limit` documents unscored.
///
/// # Errors
///
/// Returns [`SourceError::Io`] if the directory exists but cannot be read.
pub fn scan_corpus(
    docs_dir: &Path,
    query: &str,
    limit: usize,
) -> Result<Vec<RawRecord>, SourceError> {
    if !docs_dir.exists() {
        return Ok(Vec::new());
    }

    let mut pool = Vec::new();
    for entry in fs::read_dir(docs_dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("md") {
            continue;
        }
        let Ok(text) = fs::read_to_string(&path) else {
            continue;
        };
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("doc")
            .to_string();
        pool.push(RawRecord {
            title: Some(title_of(&text, &stem)),
            url: Some(format!("local://{stem}")),
            snippet: Some(snippet_of(&text)),
            body: Some(text),
            source: Some("local_md".to_string()),
            ..RawRecord::default()
        });
    }

    let query = query.trim();
    if query.is_empty() {
        pool.truncate(limit);
        return Ok(pool);
    }

    let mut scored: Vec<(usize, RawRecord)> = pool
        .into_iter()
        .filter_map(|r| {
            let hay = format!(
                "{} {}",
                r.title.as_deref().unwrap_or_default(),
                r.body.as_deref().unwrap_or_default()
            );
            let score = occurrence_score(&hay, query);
            (score > 0).then_some((score, r))
        })
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    Ok(scored.into_iter().take(limit).map(|(_, r)| r).collect())
}
