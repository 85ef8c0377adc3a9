//! Unified service container for kbseek
//!
//! Provides shared access to all core services.

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::indexer::IndexHandle;
use crate::core::pagination::Paginator;
use crate::core::resolver::ContentResolver;
use crate::core::search::SearchRanker;
use crate::core::storage::{SessionBackend, SessionStore};
use std::sync::Arc;

/// Unified services container
///
/// The CLI and the chat adapter both use this struct for service
/// access.
#[derive(Clone)]
pub struct Services {
    /// Current content + index snapshot
    pub index: Arc<IndexHandle>,

    /// Ranked search over the index
    pub search: Arc<SearchRanker>,

    /// Document formatting and media lookup
    pub resolver: Arc<ContentResolver>,

    /// Per-user result paging
    pub paginator: Arc<Paginator>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration, with the session backend it names
    pub fn new(config: Config) -> Result<Self> {
        let sessions = SessionStore::from_config(&config.session)?;
        Self::build(config, sessions)
    }

    /// Create services with an explicit session backend
    pub fn with_backend(config: Config, backend: Arc<dyn SessionBackend>) -> Result<Self> {
        let sessions = SessionStore::new(
            backend,
            config.session.ttl(),
            config.session.key_prefix.clone(),
        );
        Self::build(config, sessions)
    }

    fn build(mut config: Config, sessions: SessionStore) -> Result<Self> {
        config.normalize();
        let index = Arc::new(IndexHandle::open(
            &config.content.path,
            config.content.languages.clone(),
            config.content.default_language.clone(),
        ));

        let search = Arc::new(SearchRanker::new(
            Arc::clone(&index),
            config.search.max_query_length,
            config.search.snippet_length,
        ));

        let resolver = Arc::new(ContentResolver::new(
            Arc::clone(&index),
            config.media.clone(),
        )?);

        let paginator = Arc::new(Paginator::new(Arc::new(sessions)));

        Ok(Self {
            index,
            search,
            resolver,
            paginator,
            config: Arc::new(config),
        })
    }

    /// Re-read the configured knowledge file and swap in a new index.
    /// The previous index stays live when this fails.
    pub fn reload(&self) -> Result<()> {
        self.index.reload(&self.config.content.path)
    }
}
