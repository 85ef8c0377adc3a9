//! Core data types shared by the search, paging and resolve layers.

use crate::core::content::DocumentRef;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One ranked search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Title resolved for the query language
    pub title: String,

    /// Leading part of the description
    pub snippet: String,

    /// Handle for resolving the full document
    pub doc_ref: DocumentRef,

    /// Number of distinct query tokens found in the document
    pub score: usize,
}

/// An entry held in a paging session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SessionItem {
    /// A ranked hit pointing at a document
    Hit(SearchHit),
    /// Text that was already formatted when the session was created
    Snippet { text: String },
}

impl SessionItem {
    pub fn doc_ref(&self) -> Option<&DocumentRef> {
        match self {
            SessionItem::Hit(hit) => Some(&hit.doc_ref),
            SessionItem::Snippet { .. } => None,
        }
    }
}

impl From<SearchHit> for SessionItem {
    fn from(hit: SearchHit) -> Self {
        SessionItem::Hit(hit)
    }
}

/// One page served by the paginator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub item: SessionItem,

    /// 1-based position of `item` in the session
    pub position: usize,

    pub total_count: usize,
}

impl Page {
    pub fn has_previous(&self) -> bool {
        self.position > 1
    }

    pub fn has_next(&self) -> bool {
        self.position < self.total_count
    }
}

/// A document formatted for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedContent {
    pub text: String,

    /// First media file referenced by the content, if it exists on disk
    pub media_path: Option<PathBuf>,
}

/// Kind of media file, decides the subdirectory it lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Document,
}

/// One browsable item of a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub title: String,
    pub doc_ref: DocumentRef,
}

/// Content store statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentStats {
    pub categories: usize,
    pub documents: usize,
    pub subsections: usize,
    /// Languages present on at least one title
    pub title_languages: Vec<String>,
}

/// Inverted index statistics for one language
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageIndexStats {
    pub language: String,
    pub distinct_tokens: usize,
    pub postings: usize,
}
