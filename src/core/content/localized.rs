//! Language-keyed field values with a single fallback accessor.

use serde::Serialize;
use std::collections::BTreeMap;

/// A value that varies by language code.
///
/// Lookups go through [`LocalizedField::resolve`], which walks the
/// chain requested language -> fallback language -> `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LocalizedField<T> {
    values: BTreeMap<String, T>,
}

impl<T> Default for LocalizedField<T> {
    fn default() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }
}

impl<T> LocalizedField<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a field holding a single value under `lang`
    pub fn single(lang: &str, value: T) -> Self {
        let mut field = Self::new();
        field.insert(lang, value);
        field
    }

    /// Set the value for `lang`. Language codes are stored lower-case.
    pub fn insert(&mut self, lang: &str, value: T) {
        self.values.insert(lang.to_lowercase(), value);
    }

    /// Value stored for exactly `lang`
    pub fn get(&self, lang: &str) -> Option<&T> {
        self.values.get(lang)
    }

    /// Value for `lang`, else for `fallback`
    pub fn resolve(&self, lang: &str, fallback: &str) -> Option<&T> {
        self.get(lang).or_else(|| self.get(fallback))
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl LocalizedField<String> {
    /// Resolve to an owned string, empty when neither language is present
    pub fn resolve_or_empty(&self, lang: &str, fallback: &str) -> String {
        self.resolve(lang, fallback).cloned().unwrap_or_default()
    }
}

impl<T> FromIterator<(String, T)> for LocalizedField<T> {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        let mut field = Self::new();
        for (lang, value) in iter {
            field.insert(&lang, value);
        }
        field
    }
}
