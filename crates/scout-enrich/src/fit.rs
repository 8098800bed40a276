//! Corpus-relative fit scoring.
//!
//! Indexes the company's documents, persists the index, then queries it with
//! each notice's text and averages the top-k similarity scores into one fit
//! score per notice. The add → save → search sequence is strictly ordered
//! within a run; the index is append-only across calls.

use scout_core::{CompanyDoc, FitResult, IndexError, Notice, SimilarityIndex};

/// Query text cap, respecting index/query limits.
const QUERY_CHAR_LIMIT: usize = 5000;

/// Nearest documents considered per notice (also caps `reasons`).
const TOP_K: usize = 5;

fn query_text(notice: &Notice) -> String {
    format!("{}\n{}", notice.title, notice.body)
        .chars()
        .take(QUERY_CHAR_LIMIT)
        .collect()
}

/// Score every notice against the company's document corpus.
///
/// Returns one [`FitResult`] per notice, sorted descending by score.
/// Reasons are the top matches rendered as `"doc-id:score"` with three
/// decimal places, most relevant first. Scores are corpus-relative: not
/// comparable across runs.
///
/// # Errors
///
/// Returns [`IndexError`] if indexing, persisting, or querying fails.
pub fn score_fit<I: SimilarityIndex>(
    company_docs: &[CompanyDoc],
    notices: &[Notice],
    index: &mut I,
) -> Result<Vec<FitResult>, IndexError> {
    for doc in company_docs {
        index.add_document(&doc.id, &doc.text, &doc.tags)?;
    }
    index.save()?;

    let mut results = Vec::with_capacity(notices.len());
    for notice in notices {
        let hits = index.search(&query_text(notice), TOP_K)?;
        #[allow(clippy::cast_precision_loss)]
        let score = if hits.is_empty() {
            0.0
        } else {
            hits.iter().map(|h| h.score).sum::<f64>() / hits.len() as f64
        };
        let reasons = hits
            .iter()
            .map(|h| format!("{}:{:.3}", h.doc_id, h.score))
            .collect();
        results.push(FitResult {
            notice_url: notice.url.clone(),
            score,
            reasons,
        });
    }

    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    Ok(results)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use scout_core::{NoticeSource, SearchHit};

    use super::*;

    /// Keyword-overlap stub standing in for the real vector index.
    #[derive(Default)]
    struct StubIndex {
        docs: Vec<(String, String)>,
    }

    impl SimilarityIndex for StubIndex {
        fn add_document(
            &mut self,
            doc_id: &str,
            text: &str,
            _tags: &[String],
        ) -> Result<(), IndexError> {
            self.docs.push((doc_id.to_string(), text.to_string()));
            Ok(())
        }

        fn save(&self) -> Result<(), IndexError> {
            Ok(())
        }

        #[allow(clippy::cast_precision_loss)]
        fn search(&mut self, query_text: &str, k: usize) -> Result<Vec<SearchHit>, IndexError> {
            let mut hits: Vec<SearchHit> = self
                .docs
                .iter()
                .map(|(id, text)| SearchHit {
                    doc_id: id.clone(),
                    score: text
                        .split_whitespace()
                        .filter(|w| query_text.contains(*w))
                        .count() as f64,
                })
                .filter(|h| h.score > 0.0)
                .collect();
            hits.sort_by(|a, b| b.score.total_cmp(&a.score));
            hits.truncate(k);
            Ok(hits)
        }
    }

    fn doc(id: &str, text: &str) -> CompanyDoc {
        CompanyDoc {
            id: id.to_string(),
            text: text.to_string(),
            tags: vec![],
        }
    }

    fn notice(url: &str, title: &str, body: &str) -> Notice {
        let mut n = Notice::new(title, url, NoticeSource::LocalCorpus);
        n.body = body.to_string();
        n
    }

    #[test]
    fn scores_sorted_descending_with_reasons() {
        let docs = vec![
            doc("tour-report", "관광 데이터 분석"),
            doc("infra-report", "도로 설계"),
        ];
        let notices = vec![
            notice("local://a", "도로 공사", "도로 포장"),
            notice("local://b", "관광 플랫폼", "관광 데이터 분석 사업"),
        ];
        let mut index = StubIndex::default();
        let fits = score_fit(&docs, &notices, &mut index).unwrap();

        assert_eq!(fits.len(), 2);
        assert_eq!(fits[0].notice_url, "local://b");
        assert!(fits[0].score > fits[1].score);
        assert_eq!(fits[0].reasons[0], "tour-report:3.000");
    }

    #[test]
    fn no_hits_scores_zero_not_error() {
        let docs = vec![doc("only", "농업 현황")];
        let notices = vec![notice("local://x", "무관한 공고", "전혀 다른 내용")];
        let mut index = StubIndex::default();
        let fits = score_fit(&docs, &notices, &mut index).unwrap();
        assert!((fits[0].score - 0.0).abs() < f64::EPSILON);
        assert!(fits[0].reasons.is_empty());
    }

    #[test]
    fn reasons_capped_at_top_k() {
        let docs: Vec<CompanyDoc> = (0..8).map(|i| doc(&format!("d{i}"), "관광")).collect();
        let notices = vec![notice("local://y", "관광", "관광")];
        let mut index = StubIndex::default();
        let fits = score_fit(&docs, &notices, &mut index).unwrap();
        assert_eq!(fits[0].reasons.len(), 5);
    }

    #[test]
    fn long_body_truncated_before_query() {
        let docs = vec![doc("d", "관광")];
        let long_body = "잡음 ".repeat(4000) + "관광";
        let notices = vec![notice("local://z", "제목", &long_body)];
        let mut index = StubIndex::default();
        // The trailing token sits past the 5000-char cap, so it never
        // reaches the index query.
        let fits = score_fit(&docs, &notices, &mut index).unwrap();
        assert!((fits[0].score - 0.0).abs() < f64::EPSILON);
    }
}
