//! Per-user paging sessions.
//!
//! A session is the ranked result list of a user's last search plus a
//! cursor into it, stored as one JSON value under
//! `{key_prefix}{user_id}`. Updates always replace the whole value.

use crate::core::config::{SessionBackendKind, SessionConfig};
use crate::core::error::{KbError, Result};
use crate::core::storage::backend::{MemoryBackend, SessionBackend};
use crate::core::storage::file::FileBackend;
use crate::core::types::SessionItem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Serialized session value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    pub results: Vec<SessionItem>,
    pub cursor: usize,
    pub created_at: DateTime<Utc>,
}

impl StoredSession {
    pub fn new(results: Vec<SessionItem>) -> Self {
        Self {
            results,
            cursor: 0,
            created_at: Utc::now(),
        }
    }

    /// Whether `cursor` points into a non-empty list
    pub fn is_valid(&self) -> bool {
        self.cursor < self.results.len()
    }
}

/// Session persistence over a TTL backend
pub struct SessionStore {
    backend: Arc<dyn SessionBackend>,
    ttl: Duration,
    key_prefix: String,
}

impl SessionStore {
    pub fn new(backend: Arc<dyn SessionBackend>, ttl: Duration, key_prefix: String) -> Self {
        Self {
            backend,
            ttl,
            key_prefix,
        }
    }

    /// Build the store with the backend named in `config`
    pub fn from_config(config: &SessionConfig) -> Result<Self> {
        let backend: Arc<dyn SessionBackend> = match config.backend {
            SessionBackendKind::Memory => Arc::new(MemoryBackend::new()),
            SessionBackendKind::File => {
                let dir = config.dir.clone().ok_or_else(|| {
                    KbError::ConfigError("File session backend needs a directory".to_string())
                })?;
                Arc::new(FileBackend::new(dir))
            }
        };
        Ok(Self::new(backend, config.ttl(), config.key_prefix.clone()))
    }

    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn key(&self, user_id: i64) -> String {
        format!("{}{}", self.key_prefix, user_id)
    }

    /// Replace the user's session with `results` and a cursor at 0.
    ///
    /// An empty list removes any previous session instead, since a
    /// session never holds an empty list.
    pub async fn create_session(&self, user_id: i64, results: Vec<SessionItem>) -> Result<()> {
        if results.is_empty() {
            return self.delete(user_id).await;
        }
        let session = StoredSession::new(results);
        self.save(user_id, &session).await?;
        tracing::debug!(
            "Created session for user {} with {} results",
            user_id,
            session.results.len()
        );
        Ok(())
    }

    /// The user's session, or `None` when missing, expired or unusable
    pub async fn load(&self, user_id: i64) -> Result<Option<StoredSession>> {
        let Some(raw) = self.backend.get(&self.key(user_id)).await? else {
            return Ok(None);
        };

        match serde_json::from_str::<StoredSession>(&raw) {
            Ok(session) if session.is_valid() => Ok(Some(session)),
            Ok(_) => {
                tracing::warn!("Session for user {} has an out-of-range cursor", user_id);
                Ok(None)
            }
            Err(e) => {
                tracing::warn!("Session for user {} is unreadable: {}", user_id, e);
                Ok(None)
            }
        }
    }

    /// Write the whole session value, restarting its TTL
    pub async fn save(&self, user_id: i64, session: &StoredSession) -> Result<()> {
        let value = serde_json::to_string(session)?;
        self.backend.set(&self.key(user_id), value, self.ttl).await
    }

    /// Restart the session's TTL, leaving its value as stored
    pub async fn touch(&self, user_id: i64) -> Result<bool> {
        self.backend.touch(&self.key(user_id), self.ttl).await
    }

    pub async fn delete(&self, user_id: i64) -> Result<()> {
        self.backend.delete(&self.key(user_id)).await
    }
}
