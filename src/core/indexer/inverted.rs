//! Per-language inverted index over the content store.

use crate::core::content::{ContentStore, DocumentRef};
use crate::core::indexer::tokenizer::tokenize;
use crate::core::types::LanguageIndexStats;
use std::collections::HashMap;
use std::time::Instant;

type Postings = HashMap<String, Vec<DocumentRef>>;

/// `language -> token -> [DocumentRef]`
///
/// Built once from a [`ContentStore`] and never mutated afterwards.
/// A reference appears once per token occurrence; repeats are kept.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    languages: HashMap<String, Postings>,
}

impl InvertedIndex {
    /// Index every document's title, description, subsection titles and
    /// subsection lines for each of `languages`. Fields missing in a
    /// language contribute nothing for that language.
    pub fn build(store: &ContentStore, languages: &[String]) -> Self {
        let start = Instant::now();
        let mut index = Self::default();

        for lang in languages {
            let postings = index.languages.entry(lang.clone()).or_default();

            for doc in store.documents() {
                let doc_ref = doc.doc_ref();
                for text in doc.texts_in(lang) {
                    for token in tokenize(text) {
                        postings.entry(token).or_default().push(doc_ref.clone());
                    }
                }
            }
        }

        tracing::info!(
            "Built inverted index for {} languages over {} documents in {}ms",
            languages.len(),
            store.len(),
            start.elapsed().as_millis()
        );

        index
    }

    /// Postings for `token` in `lang`, empty when unknown
    pub fn get(&self, lang: &str, token: &str) -> &[DocumentRef] {
        self.languages
            .get(lang)
            .and_then(|postings| postings.get(token))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn has_language(&self, lang: &str) -> bool {
        self.languages.contains_key(lang)
    }

    pub fn stats(&self) -> Vec<LanguageIndexStats> {
        let mut stats: Vec<_> = self
            .languages
            .iter()
            .map(|(lang, postings)| LanguageIndexStats {
                language: lang.clone(),
                distinct_tokens: postings.len(),
                postings: postings.values().map(Vec::len).sum(),
            })
            .collect();
        stats.sort_by(|a, b| a.language.cmp(&b.language));
        stats
    }
}
