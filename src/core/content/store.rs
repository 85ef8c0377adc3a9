//! Loading the knowledge tree from its JSON file.
//!
//! The file is an object keyed by category name, each value a list
//! of items `{id, title, description, subsections}`. Malformed
//! entries are skipped one at a time with a warning; only an
//! unreadable or non-object file fails the whole load.

use crate::core::content::document::{Document, DocumentRef, Subsection};
use crate::core::content::localized::LocalizedField;
use crate::core::error::{KbError, Result};
use crate::core::types::{CategoryEntry, ContentStats};
use serde::Deserialize;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawText {
    Localized(BTreeMap<String, String>),
    Plain(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLines {
    Many(Vec<String>),
    One(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawContent {
    Localized(BTreeMap<String, RawLines>),
    Plain(RawLines),
}

#[derive(Deserialize)]
struct RawSubsection {
    #[serde(default)]
    title: Option<RawText>,
    #[serde(default)]
    content: Option<RawContent>,
}

#[derive(Deserialize)]
struct RawItem {
    id: RawId,
    #[serde(default)]
    title: Option<RawText>,
    #[serde(default)]
    description: Option<RawText>,
    #[serde(default)]
    subsections: Vec<RawSubsection>,
}

impl RawLines {
    fn into_vec(self) -> Vec<String> {
        match self {
            RawLines::Many(lines) => lines,
            RawLines::One(line) => vec![line],
        }
    }
}

fn text_field(raw: Option<RawText>, default_lang: &str) -> LocalizedField<String> {
    match raw {
        Some(RawText::Localized(map)) => map.into_iter().collect(),
        Some(RawText::Plain(text)) => LocalizedField::single(default_lang, text),
        None => LocalizedField::new(),
    }
}

fn content_field(raw: Option<RawContent>, default_lang: &str) -> LocalizedField<Vec<String>> {
    match raw {
        Some(RawContent::Localized(map)) => map
            .into_iter()
            .map(|(lang, lines)| (lang, lines.into_vec()))
            .collect(),
        Some(RawContent::Plain(lines)) => LocalizedField::single(default_lang, lines.into_vec()),
        None => LocalizedField::new(),
    }
}

/// The in-memory document tree
#[derive(Debug, Default)]
pub struct ContentStore {
    /// Documents in category order, then item order
    documents: Vec<Document>,
    /// Position of each document in `documents`
    positions: HashMap<DocumentRef, usize>,
    /// Category keys in file order
    categories: Vec<String>,
}

impl ContentStore {
    /// An empty store, used when the knowledge file cannot be loaded
    pub fn empty() -> Self {
        Self::default()
    }

    /// Read and parse the knowledge file at `path`
    pub fn load(path: &Path, default_lang: &str) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            KbError::ContentLoad(format!("Failed to read {}: {e}", path.display()))
        })?;
        let value: Value = serde_json::from_str(&contents).map_err(|e| {
            KbError::ContentLoad(format!("Failed to parse {}: {e}", path.display()))
        })?;

        let store = Self::from_value(value, default_lang)?;
        tracing::info!(
            "Loaded {} documents in {} categories from {:?}",
            store.len(),
            store.categories.len(),
            path
        );
        Ok(store)
    }

    /// Build the store from an already parsed JSON tree
    pub fn from_value(value: Value, default_lang: &str) -> Result<Self> {
        let Value::Object(tree) = value else {
            return Err(KbError::ContentLoad(
                "Knowledge root must be an object keyed by category".to_string(),
            ));
        };

        let mut store = Self::empty();

        for (category_key, items) in tree {
            let Value::Array(items) = items else {
                tracing::warn!("Skipping category '{}': value is not a list", category_key);
                continue;
            };

            if category_key.is_empty() || category_key.contains(':') {
                tracing::warn!("Skipping category '{}': invalid key", category_key);
                continue;
            }

            store.categories.push(category_key.clone());
            let mut seen_ids = HashSet::new();

            for (idx, item) in items.into_iter().enumerate() {
                let raw: RawItem = match serde_json::from_value(item) {
                    Ok(raw) => raw,
                    Err(e) => {
                        tracing::warn!(
                            "Skipping item #{} in category '{}': {}",
                            idx,
                            category_key,
                            e
                        );
                        continue;
                    }
                };

                let item_id = match raw.id {
                    RawId::Text(id) => id,
                    RawId::Number(n) => n.to_string(),
                };
                if item_id.is_empty() {
                    tracing::warn!("Skipping item #{} in '{}': empty id", idx, category_key);
                    continue;
                }
                if !seen_ids.insert(item_id.clone()) {
                    tracing::warn!(
                        "Skipping duplicate item id '{}' in category '{}'",
                        item_id,
                        category_key
                    );
                    continue;
                }

                let document = Document {
                    category_key: category_key.clone(),
                    item_id,
                    title: text_field(raw.title, default_lang),
                    description: text_field(raw.description, default_lang),
                    subsections: raw
                        .subsections
                        .into_iter()
                        .map(|sub| Subsection {
                            title: text_field(sub.title, default_lang),
                            content: content_field(sub.content, default_lang),
                        })
                        .collect(),
                };

                store
                    .positions
                    .insert(document.doc_ref(), store.documents.len());
                store.documents.push(document);
            }
        }

        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Documents in category order, then item order
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn get(&self, category_key: &str, item_id: &str) -> Option<&Document> {
        self.get_ref(&DocumentRef::new(category_key, item_id))
    }

    pub fn get_ref(&self, doc_ref: &DocumentRef) -> Option<&Document> {
        self.positions.get(doc_ref).map(|&pos| &self.documents[pos])
    }

    /// Load-order position of a document, used to break ranking ties
    pub fn position(&self, doc_ref: &DocumentRef) -> Option<usize> {
        self.positions.get(doc_ref).copied()
    }

    /// Category keys in file order
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Menu entries for one category, titles resolved for `lang`
    pub fn category_items(&self, category_key: &str, lang: &str, fallback: &str) -> Vec<CategoryEntry> {
        self.documents
            .iter()
            .filter(|doc| doc.category_key == category_key)
            .map(|doc| CategoryEntry {
                title: doc.title.resolve_or_empty(lang, fallback),
                doc_ref: doc.doc_ref(),
            })
            .collect()
    }

    pub fn stats(&self) -> ContentStats {
        let mut languages: Vec<String> = self
            .documents
            .iter()
            .flat_map(|doc| doc.title.languages().map(str::to_string))
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        languages.sort();

        ContentStats {
            categories: self.categories.len(),
            documents: self.documents.len(),
            subsections: self.documents.iter().map(|d| d.subsections.len()).sum(),
            title_languages: languages,
        }
    }
}
