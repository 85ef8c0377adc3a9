//! Key/value backends with per-entry expiry.

use crate::core::error::{KbError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// A TTL-capable key/value store holding serialized sessions.
///
/// Every `set` replaces the whole value and restarts its TTL. An
/// expired entry is indistinguishable from a missing one.
#[async_trait]
pub trait SessionBackend: Send + Sync {
    /// Backend name for logs
    fn name(&self) -> &str;

    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<()>;

    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Restart the TTL of a live entry without replacing its value.
    /// Returns `false` when the entry is missing or expired.
    async fn touch(&self, key: &str, ttl: Duration) -> Result<bool>;

    async fn delete(&self, key: &str) -> Result<()>;
}

/// In-process backend, for tests and single-process hosts
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, (String, Instant)>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionBackend for MemoryBackend {
    fn name(&self) -> &str {
        "memory"
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<()> {
        let expires_at = expiry(ttl)?;
        let mut entries = self.entries.lock().await;
        entries.insert(key.to_string(), (value, expires_at));
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut entries = self.entries.lock().await;
        match entries.get(key) {
            Some((_, expires_at)) if *expires_at <= Instant::now() => {
                entries.remove(key);
                Ok(None)
            }
            Some((value, _)) => Ok(Some(value.clone())),
            None => Ok(None),
        }
    }

    async fn touch(&self, key: &str, ttl: Duration) -> Result<bool> {
        let expires_at = expiry(ttl)?;
        let mut entries = self.entries.lock().await;
        match entries.get_mut(key) {
            Some((_, current)) if *current > Instant::now() => {
                *current = expires_at;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.entries.lock().await.remove(key);
        Ok(())
    }
}

fn expiry(ttl: Duration) -> Result<Instant> {
    Instant::now()
        .checked_add(ttl)
        .ok_or_else(|| KbError::StorageError(format!("TTL out of range: {ttl:?}")))
}
