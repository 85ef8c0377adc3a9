//! Content resolver.
//!
//! Formats one document for display in the requested language and
//! locates at most one media file referenced from its content lines.

mod media;

pub use media::MediaLocator;

use crate::core::config::MediaConfig;
use crate::core::content::{Document, DocumentRef};
use crate::core::error::{KbError, Result};
use crate::core::indexer::IndexHandle;
use crate::core::messages::{self, Message};
use crate::core::types::ResolvedContent;
use std::path::PathBuf;
use std::sync::Arc;

/// Renders documents from the current snapshot
pub struct ContentResolver {
    index: Arc<IndexHandle>,
    media: MediaLocator,
}

impl ContentResolver {
    pub fn new(index: Arc<IndexHandle>, media: MediaConfig) -> Result<Self> {
        Ok(Self {
            index,
            media: MediaLocator::new(media)?,
        })
    }

    /// Format `category_key:item_id` in `lang`.
    ///
    /// An unknown document yields the localized not-found text and no
    /// media. A referenced media file that does not exist on disk is
    /// dropped with a warning; the text is returned regardless.
    pub fn resolve(&self, category_key: &str, item_id: &str, lang: &str) -> ResolvedContent {
        let snapshot = self.index.snapshot();
        let fallback = self.index.default_language();
        let lang = lang.to_lowercase();

        let Some(doc) = snapshot.store.get(category_key, item_id) else {
            tracing::warn!("Document {}:{} not found", category_key, item_id);
            return ResolvedContent {
                text: messages::text(Message::NotFound, &lang).to_string(),
                media_path: None,
            };
        };

        let (text, media) = self.render(doc, &lang, fallback);
        let media_path = media.and_then(|path| match check_media(path) {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::warn!("{}", e);
                None
            }
        });

        ResolvedContent { text, media_path }
    }

    /// Same as [`resolve`](Self::resolve) for a parsed reference
    pub fn resolve_ref(&self, doc_ref: &DocumentRef, lang: &str) -> ResolvedContent {
        let (category_key, item_id) = doc_ref.parts();
        self.resolve(category_key, item_id, lang)
    }

    /// Text blocks plus the first media candidate found in content lines
    fn render(&self, doc: &Document, lang: &str, fallback: &str) -> (String, Option<PathBuf>) {
        let mut blocks: Vec<String> = Vec::new();
        let mut media: Option<PathBuf> = None;

        for field in [&doc.title, &doc.description] {
            let value = field.resolve_or_empty(lang, fallback);
            if !value.trim().is_empty() {
                blocks.push(value);
            }
        }

        for subsection in &doc.subsections {
            let mut lines: Vec<&str> = Vec::new();
            if let Some(title) = subsection.title.resolve(lang, fallback) {
                if !title.trim().is_empty() {
                    lines.push(title);
                }
            }
            for line in subsection.content.resolve(lang, fallback).into_iter().flatten() {
                if media.is_none() {
                    media = self
                        .media
                        .find(line)
                        .and_then(|name| self.media.path_for(name));
                }
                lines.push(line);
            }
            if !lines.is_empty() {
                blocks.push(lines.join("\n"));
            }
        }

        (blocks.join("\n\n"), media)
    }
}

fn check_media(path: PathBuf) -> Result<PathBuf> {
    if path.is_file() {
        Ok(path)
    } else {
        Err(KbError::MediaNotFound(path))
    }
}
