//! Immutable content + index snapshot behind a swappable reference.
//!
//! Readers clone the current `Arc<Snapshot>` and work on it for the
//! whole request. A reload builds a complete new snapshot off to the
//! side and replaces the pointer in one step, so no reader ever sees
//! a partially built index.

use crate::core::content::ContentStore;
use crate::core::error::Result;
use crate::core::indexer::InvertedIndex;
use std::path::Path;
use std::sync::{Arc, RwLock};

/// A loaded content store and the index built from it
#[derive(Debug, Default)]
pub struct Snapshot {
    pub store: ContentStore,
    pub index: InvertedIndex,
}

impl Snapshot {
    pub fn build(store: ContentStore, languages: &[String]) -> Self {
        let index = InvertedIndex::build(&store, languages);
        Self { store, index }
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

/// Shared handle to the current snapshot
#[derive(Debug)]
pub struct IndexHandle {
    current: RwLock<Arc<Snapshot>>,
    languages: Vec<String>,
    default_language: String,
}

impl IndexHandle {
    pub fn new(snapshot: Snapshot, languages: Vec<String>, default_language: String) -> Self {
        Self {
            current: RwLock::new(Arc::new(snapshot)),
            languages,
            default_language,
        }
    }

    /// Load the knowledge file and index it. A load failure is logged
    /// and yields an empty snapshot, so searches return nothing rather
    /// than failing.
    pub fn open(path: &Path, languages: Vec<String>, default_language: String) -> Self {
        let snapshot = match ContentStore::load(path, &default_language) {
            Ok(store) => Snapshot::build(store, &languages),
            Err(e) => {
                tracing::warn!("{}; starting with an empty knowledge base", e);
                Snapshot::default()
            }
        };
        Self::new(snapshot, languages, default_language)
    }

    /// The snapshot current at the time of the call
    pub fn snapshot(&self) -> Arc<Snapshot> {
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&*guard)
    }

    /// Replace the current snapshot
    pub fn swap(&self, snapshot: Snapshot) {
        let next = Arc::new(snapshot);
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        *guard = next;
    }

    /// Rebuild from `path` and swap in the result. On failure the
    /// previous snapshot stays live.
    pub fn reload(&self, path: &Path) -> Result<()> {
        let store = match ContentStore::load(path, &self.default_language) {
            Ok(store) => store,
            Err(e) => {
                tracing::warn!("Reload failed, keeping previous knowledge base: {}", e);
                return Err(e);
            }
        };
        self.swap(Snapshot::build(store, &self.languages));
        tracing::info!("Knowledge base reloaded from {:?}", path);
        Ok(())
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }
}
