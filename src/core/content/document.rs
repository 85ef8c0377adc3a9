//! Knowledge documents and the references that point at them.

use crate::core::content::localized::LocalizedField;
use crate::core::error::{KbError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque `"<category_key>:<item_id>"` handle.
///
/// The index returns these, sessions carry them, and chat callbacks
/// embed them so a later interaction can resolve the document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentRef(String);

impl DocumentRef {
    pub fn new(category_key: &str, item_id: &str) -> Self {
        Self(format!("{category_key}:{item_id}"))
    }

    /// Parse a reference string. The category key ends at the first colon.
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.split_once(':') {
            Some((category, item)) if !category.is_empty() && !item.is_empty() => {
                Ok(Self(raw.to_string()))
            }
            _ => Err(KbError::InvalidDocumentRef(raw.to_string())),
        }
    }

    /// Split into `(category_key, item_id)`
    pub fn parts(&self) -> (&str, &str) {
        self.0.split_once(':').unwrap_or((self.0.as_str(), ""))
    }

    pub fn category_key(&self) -> &str {
        self.parts().0
    }

    pub fn item_id(&self) -> &str {
        self.parts().1
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One titled block of content lines inside a document
#[derive(Debug, Clone, Default, Serialize)]
pub struct Subsection {
    pub title: LocalizedField<String>,
    pub content: LocalizedField<Vec<String>>,
}

/// A single knowledge item
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    pub category_key: String,
    pub item_id: String,
    pub title: LocalizedField<String>,
    pub description: LocalizedField<String>,
    pub subsections: Vec<Subsection>,
}

impl Document {
    pub fn doc_ref(&self) -> DocumentRef {
        DocumentRef::new(&self.category_key, &self.item_id)
    }

    /// All text of the document in `lang`, each field falling back to
    /// `fallback` independently.
    pub fn texts<'a>(&'a self, lang: &'a str, fallback: &'a str) -> Vec<&'a str> {
        let mut texts = Vec::new();
        if let Some(title) = self.title.resolve(lang, fallback) {
            texts.push(title.as_str());
        }
        if let Some(description) = self.description.resolve(lang, fallback) {
            texts.push(description.as_str());
        }
        for sub in &self.subsections {
            if let Some(title) = sub.title.resolve(lang, fallback) {
                texts.push(title.as_str());
            }
            if let Some(lines) = sub.content.resolve(lang, fallback) {
                texts.extend(lines.iter().map(String::as_str));
            }
        }
        texts
    }

    /// Text of the document in exactly `lang`, no fallback
    pub fn texts_in(&self, lang: &str) -> Vec<&str> {
        let mut texts = Vec::new();
        texts.extend(self.title.get(lang).map(String::as_str));
        texts.extend(self.description.get(lang).map(String::as_str));
        for sub in &self.subsections {
            texts.extend(sub.title.get(lang).map(String::as_str));
            if let Some(lines) = sub.content.get(lang) {
                texts.extend(lines.iter().map(String::as_str));
            }
        }
        texts
    }
}
