//! Token-overlap ranking over the inverted index.
//!
//! Candidates are the union of the posting lists of every query
//! token. Each candidate is scored by how many distinct query tokens
//! appear anywhere in its text for the query language (each field
//! falling back to the default language), recomputed from the fields
//! rather than from posting counts so repeated words do not inflate
//! the score. Ties keep content-file order.

use crate::core::content::{Document, DocumentRef};
use crate::core::indexer::{tokenize, IndexHandle};
use crate::core::types::SearchHit;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

/// Ranked search over the current index snapshot
pub struct SearchRanker {
    index: Arc<IndexHandle>,
    max_query_length: usize,
    snippet_length: usize,
}

impl SearchRanker {
    pub fn new(index: Arc<IndexHandle>, max_query_length: usize, snippet_length: usize) -> Self {
        Self {
            index,
            max_query_length,
            snippet_length,
        }
    }

    /// Rank every matching document for `query` in `lang`.
    ///
    /// Returns an empty list when the query has no word characters or
    /// the knowledge base is unavailable; this never fails.
    pub fn search(&self, query: &str, lang: &str) -> Vec<SearchHit> {
        let start = Instant::now();
        let snapshot = self.index.snapshot();
        let fallback = self.index.default_language();

        if snapshot.is_empty() {
            tracing::warn!("Search for '{}' skipped: knowledge base is empty", query);
            return Vec::new();
        }

        let lang = lang.to_lowercase();
        let lang = if snapshot.index.has_language(&lang) {
            lang
        } else {
            tracing::debug!("Language '{}' is not indexed, using '{}'", lang, fallback);
            fallback.to_string()
        };

        let query_tokens = self.query_tokens(query);
        if query_tokens.is_empty() {
            return Vec::new();
        }

        let mut candidates: HashSet<&DocumentRef> = HashSet::new();
        for token in &query_tokens {
            candidates.extend(snapshot.index.get(&lang, token));
        }

        let mut scored: Vec<(usize, usize, &Document)> = candidates
            .into_iter()
            .filter_map(|doc_ref| {
                let position = snapshot.store.position(doc_ref)?;
                let doc = snapshot.store.get_ref(doc_ref)?;
                Some((score(doc, &query_tokens, &lang, fallback), position, doc))
            })
            .collect();

        scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));

        let hits: Vec<SearchHit> = scored
            .into_iter()
            .map(|(score, _, doc)| SearchHit {
                title: doc.title.resolve_or_empty(&lang, fallback),
                snippet: snippet(
                    &doc.description.resolve_or_empty(&lang, fallback),
                    self.snippet_length,
                ),
                doc_ref: doc.doc_ref(),
                score,
            })
            .collect();

        tracing::info!(
            "Search for '{}' ({}) yielded {} results in {}us",
            query,
            lang,
            hits.len(),
            start.elapsed().as_micros()
        );

        hits
    }

    /// Distinct query tokens in first-seen order, after length capping
    fn query_tokens(&self, query: &str) -> Vec<String> {
        let capped: String = query.chars().take(self.max_query_length).collect();
        let mut seen = HashSet::new();
        tokenize(&capped)
            .into_iter()
            .filter(|token| seen.insert(token.clone()))
            .collect()
    }
}

/// Count of distinct query tokens present in the document
fn score(doc: &Document, query_tokens: &[String], lang: &str, fallback: &str) -> usize {
    let doc_tokens: HashSet<String> = doc
        .texts(lang, fallback)
        .into_iter()
        .flat_map(tokenize)
        .collect();
    query_tokens
        .iter()
        .filter(|token| doc_tokens.contains(*token))
        .count()
}

/// First `max_chars` characters, with an ellipsis when cut
fn snippet(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
