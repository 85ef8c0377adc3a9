// Integration tests for session persistence

use crate::common::snippet_items;
use kbseek::core::config::{SessionBackendKind, SessionConfig};
use kbseek::core::storage::{FileBackend, MemoryBackend, SessionBackend, SessionStore};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

fn file_store(dir: &TempDir, ttl: Duration) -> SessionStore {
    SessionStore::new(
        Arc::new(FileBackend::new(dir.path().to_path_buf())),
        ttl,
        "pagination:".to_string(),
    )
}

#[tokio::test]
async fn test_file_sessions_shared_between_stores() {
    let dir = TempDir::new().unwrap();
    let a = file_store(&dir, Duration::from_secs(60));
    let b = file_store(&dir, Duration::from_secs(60));

    a.create_session(42, snippet_items(3)).await.unwrap();
    let session = b.load(42).await.unwrap().expect("session visible to b");
    assert_eq!(session.results.len(), 3);
    assert_eq!(session.cursor, 0);
}

#[tokio::test]
async fn test_file_session_key_layout() {
    let dir = TempDir::new().unwrap();
    let store = file_store(&dir, Duration::from_secs(60));
    store.create_session(42, snippet_items(1)).await.unwrap();

    assert!(dir.path().join("pagination%3A42.json").exists());
    store.delete(42).await.unwrap();
    assert!(!dir.path().join("pagination%3A42.json").exists());
}

#[tokio::test]
async fn test_file_session_expires() {
    let dir = TempDir::new().unwrap();
    let store = file_store(&dir, Duration::from_millis(50));
    store.create_session(1, snippet_items(2)).await.unwrap();

    tokio::time::sleep(Duration::from_millis(120)).await;
    assert!(store.load(1).await.unwrap().is_none());
}

#[tokio::test]
async fn test_users_are_isolated() {
    let store = SessionStore::new(
        Arc::new(MemoryBackend::new()),
        Duration::from_secs(60),
        "pagination:".to_string(),
    );
    store.create_session(1, snippet_items(2)).await.unwrap();
    store.create_session(2, snippet_items(5)).await.unwrap();

    store.delete(1).await.unwrap();
    assert!(store.load(1).await.unwrap().is_none());
    assert_eq!(store.load(2).await.unwrap().unwrap().results.len(), 5);
}

#[tokio::test]
async fn test_negative_user_ids() {
    let dir = TempDir::new().unwrap();
    let store = file_store(&dir, Duration::from_secs(60));
    store.create_session(-100123, snippet_items(1)).await.unwrap();
    assert!(store.load(-100123).await.unwrap().is_some());
    assert!(store.load(100123).await.unwrap().is_none());
}

#[tokio::test]
async fn test_store_from_config() {
    let dir = TempDir::new().unwrap();
    let config = SessionConfig {
        backend: SessionBackendKind::File,
        dir: Some(dir.path().to_path_buf()),
        ..SessionConfig::default()
    };
    let store = SessionStore::from_config(&config).unwrap();
    assert_eq!(store.backend_name(), "file");
    assert_eq!(store.ttl(), Duration::from_secs(3600));

    let config = SessionConfig {
        backend: SessionBackendKind::Memory,
        ..SessionConfig::default()
    };
    assert_eq!(SessionStore::from_config(&config).unwrap().backend_name(), "memory");
}

#[tokio::test]
async fn test_raw_value_shape() {
    let backend = Arc::new(MemoryBackend::new());
    let store = SessionStore::new(
        backend.clone(),
        Duration::from_secs(60),
        "pagination:".to_string(),
    );
    store.create_session(5, snippet_items(1)).await.unwrap();

    let raw = backend.get("pagination:5").await.unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["cursor"], 0);
    assert_eq!(value["results"][0]["kind"], "snippet");
    assert_eq!(value["results"][0]["text"], "r1");
    assert!(value["created_at"].is_string());
}
