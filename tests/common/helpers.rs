// Test helper functions

use crate::common::fixtures::TestKnowledgeBase;
use kbseek::core::config::{Config, SessionBackendKind};
use kbseek::core::services::Services;
use kbseek::core::storage::MemoryBackend;
use kbseek::core::types::{SearchHit, SessionItem};
use std::sync::Arc;

fn test_config(kb: &TestKnowledgeBase) -> Config {
    let mut config = Config::default();
    config.content.path = kb.content_file();
    config.media.root = kb.media_root();
    config.session.dir = Some(kb.sessions_dir());
    config
}

/// Services over `kb` with an in-memory session backend
#[allow(dead_code)] // Used in integration tests
pub fn create_test_services(kb: &TestKnowledgeBase) -> Arc<Services> {
    let config = test_config(kb);
    Arc::new(
        Services::with_backend(config, Arc::new(MemoryBackend::new()))
            .expect("Failed to create services"),
    )
}

/// Services over `kb` with the file session backend; separate calls
/// share sessions like separate processes would
#[allow(dead_code)] // Used in integration tests
pub fn create_file_services(kb: &TestKnowledgeBase) -> Arc<Services> {
    let mut config = test_config(kb);
    config.session.backend = SessionBackendKind::File;
    Arc::new(Services::new(config).expect("Failed to create services"))
}

/// DocumentRef strings of a hit list, in order
#[allow(dead_code)] // Used in integration tests
pub fn hit_refs(hits: &[SearchHit]) -> Vec<String> {
    hits.iter().map(|h| h.doc_ref.to_string()).collect()
}

/// `n` plain snippet items named r1..rn
#[allow(dead_code)] // Used in integration tests
pub fn snippet_items(n: usize) -> Vec<SessionItem> {
    (1..=n)
        .map(|i| SessionItem::Snippet {
            text: format!("r{i}"),
        })
        .collect()
}
