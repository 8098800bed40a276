//! Command pipelines: fetch/rank, corpus match/enrich, disclosure.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use scout_config::ScoutConfig;
use scout_core::{
    AwardInfo, CompanyDoc, CompanyProfile, CompetitorMention, FitResult, Notice, ProposalOutline,
};
use scout_disclosure::{CommandReply, handle_command, is_disclosure_command};
use scout_enrich::{extract_award_info, extract_competitors, make_proposal_outline, score_fit};
use scout_index::{EmbeddingEngine, VectorIndex};
use scout_rank::{merge_dedup, normalize_all, rank, rank_for_profile};
use scout_sources::{OpenDataClient, SearchClient, fetch_all, scan_corpus};
use serde::{Deserialize, Serialize};

use crate::session;

/// Ranked result of one `find` run, also the session payload.
#[derive(Debug, Serialize, Deserialize)]
pub struct RankedNotices {
    pub query: String,
    pub items: Vec<Notice>,
}

/// One notice with its full enrichment.
#[derive(Debug, Serialize)]
pub struct EnrichedNotice {
    pub notice: Notice,
    pub fit: FitResult,
    pub award: AwardInfo,
    pub competitors: Vec<CompetitorMention>,
    pub proposal: ProposalOutline,
}

/// Result of one `match` run.
#[derive(Debug, Serialize)]
pub struct EnrichedSet {
    pub query: String,
    pub items: Vec<EnrichedNotice>,
}

pub async fn find(config: &ScoutConfig, query: &str, limit: usize) -> anyhow::Result<()> {
    let timeout = Duration::from_secs(config.fetch.timeout_secs);
    let search = SearchClient::new(config.search.clone(), timeout);
    let open_data = OpenDataClient::new(config.open_data.clone(), timeout);

    let raws = fetch_all(&search, &open_data, &config.fetch, query).await;
    let mut items = rank(merge_dedup(normalize_all(&raws)), query);
    items.truncate(limit);
    tracing::debug!(raw = raws.len(), ranked = items.len(), "find pipeline done");

    let result = RankedNotices {
        query: query.to_string(),
        items,
    };
    session::save(&result).context("failed to persist session result")?;
    print_json(&result)
}

pub async fn match_corpus(
    config: &ScoutConfig,
    query: &str,
    docs_override: Option<&Path>,
    profile_path: Option<&Path>,
    limit: usize,
) -> anyhow::Result<()> {
    let docs_dir =
        docs_override.map_or_else(|| PathBuf::from(&config.fetch.docs_dir), Path::to_path_buf);
    let index_dir = PathBuf::from(&config.fetch.index_dir);
    let corpus_limit = config.fetch.corpus_limit;
    let profile = profile_path.map(load_profile).transpose()?;
    let query = query.to_string();

    // The embedding runtime is synchronous; keep it off the async executor.
    let set = tokio::task::spawn_blocking(move || {
        enrich_corpus(
            &docs_dir,
            &index_dir,
            &query,
            profile.as_ref(),
            corpus_limit,
            limit,
        )
    })
    .await??;

    print_json(&set)
}

pub fn disclose(text: &str) -> anyhow::Result<()> {
    let result = session::load().context("no prior find result; run `scout find` first")?;

    let reply = if is_disclosure_command(text) {
        handle_command(text, &result.items)
    } else {
        CommandReply {
            ok: false,
            message: "정보공개 청구 명령이 아닙니다. '정보공개 청구서 생성'을 포함하세요."
                .to_string(),
            ticket: None,
            target_title: None,
        }
    };
    print_json(&reply)
}

fn load_profile(path: &Path) -> anyhow::Result<CompanyProfile> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read profile {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("malformed profile {}", path.display()))
}

fn enrich_corpus(
    docs_dir: &Path,
    index_dir: &Path,
    query: &str,
    profile: Option<&CompanyProfile>,
    corpus_limit: usize,
    limit: usize,
) -> anyhow::Result<EnrichedSet> {
    let raws = scan_corpus(docs_dir, query, corpus_limit)?;
    let mut notices = merge_dedup(normalize_all(&raws));
    if let Some(profile) = profile {
        let keep = notices.len();
        notices = rank_for_profile(notices, profile, keep);
    }

    // The whole corpus, query-independent, is the company document set the
    // candidates are scored against.
    let company_docs = corpus_docs(docs_dir, corpus_limit)?;
    let engine = EmbeddingEngine::new()?;
    let mut index = VectorIndex::open(index_dir, engine)?;
    let fits = score_fit(&company_docs, &notices, &mut index)?;

    let by_url: HashMap<&str, &Notice> = notices.iter().map(|n| (n.url.as_str(), n)).collect();
    let mut items = Vec::new();
    for fit in fits.into_iter().take(limit) {
        let Some(notice) = by_url.get(fit.notice_url.as_str()).copied() else {
            continue;
        };
        let award = extract_award_info(notice);
        let competitors = extract_competitors(&notice.body, &[]);
        let proposal = make_proposal_outline(notice, &award, &fit.reasons);
        items.push(EnrichedNotice {
            notice: notice.clone(),
            fit,
            award,
            competitors,
            proposal,
        });
    }

    Ok(EnrichedSet {
        query: query.to_string(),
        items,
    })
}

fn corpus_docs(docs_dir: &Path, limit: usize) -> anyhow::Result<Vec<CompanyDoc>> {
    let raws = scan_corpus(docs_dir, "", limit)?;
    Ok(raws
        .into_iter()
        .enumerate()
        .map(|(i, raw)| CompanyDoc {
            id: raw
                .title
                .or(raw.url)
                .unwrap_or_else(|| format!("doc-{i}")),
            text: raw.body.or(raw.snippet).unwrap_or_default(),
            tags: raw.source.into_iter().collect(),
        })
        .collect())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn write_doc(dir: &Path, name: &str, body: &str) {
        fs::write(dir.join(name), body).unwrap();
    }

    #[test]
    fn corpus_docs_derive_ids_from_headings() {
        let dir = tempfile::tempdir().unwrap();
        write_doc(dir.path(), "tour.md", "# 관광 데이터 실적\n관광 플랫폼 구축 보고");
        write_doc(dir.path(), "farm.md", "농업 현황 정리");

        let docs = corpus_docs(dir.path(), 10).unwrap();
        assert_eq!(docs.len(), 2);
        assert!(docs.iter().any(|d| d.id == "관광 데이터 실적"));
        assert!(docs.iter().all(|d| !d.text.is_empty()));
    }

    #[test]
    fn corpus_docs_empty_dir_is_empty_set() {
        let dir = tempfile::tempdir().unwrap();
        assert!(corpus_docs(dir.path(), 10).unwrap().is_empty());
    }
}
