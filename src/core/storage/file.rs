//! File-per-key session backend.
//!
//! Each key maps to `{dir}/{encoded-key}.json` holding the value and
//! its wall-clock expiry. Writes go to a temporary file first and are
//! renamed into place, so concurrent readers (in this or another
//! process) see either the old or the new value, never a torn one.

use crate::core::error::{KbError, Result};
use crate::core::storage::backend::SessionBackend;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::fs;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Entry {
    value: String,
    expires_at: DateTime<Utc>,
}

/// Stores sessions as JSON files under one directory
#[derive(Debug)]
pub struct FileBackend {
    dir: PathBuf,
    tmp_counter: AtomicU64,
}

impl FileBackend {
    pub fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            tmp_counter: AtomicU64::new(0),
        }
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", encode_key(key)))
    }

    fn tmp_path(&self, key: &str) -> PathBuf {
        let n = self.tmp_counter.fetch_add(1, Ordering::Relaxed);
        self.dir.join(format!(
            ".{}.{}.{}.tmp",
            encode_key(key),
            std::process::id(),
            n
        ))
    }
}

impl FileBackend {
    /// Read the entry stored under `key`. Expired and corrupt files
    /// read as `None` and stay on disk until the next `set` for the
    /// key replaces them.
    async fn read_entry(&self, key: &str) -> Result<Option<Entry>> {
        let path = self.entry_path(key);
        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let entry: Entry = match serde_json::from_slice(&bytes) {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Ignoring corrupt session file {:?}: {}", path, e);
                return Ok(None);
            }
        };

        if entry.expires_at <= Utc::now() {
            return Ok(None);
        }
        Ok(Some(entry))
    }

    async fn write_entry(&self, key: &str, entry: &Entry) -> Result<()> {
        fs::create_dir_all(&self.dir).await?;
        let tmp = self.tmp_path(key);
        fs::write(&tmp, serde_json::to_vec(entry)?).await?;
        if let Err(e) = fs::rename(&tmp, self.entry_path(key)).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(e.into());
        }
        Ok(())
    }
}

fn expiry(ttl: Duration) -> Result<DateTime<Utc>> {
    chrono::Duration::from_std(ttl)
        .ok()
        .and_then(|ttl| Utc::now().checked_add_signed(ttl))
        .ok_or_else(|| KbError::StorageError(format!("TTL out of range: {ttl:?}")))
}

#[async_trait]
impl SessionBackend for FileBackend {
    fn name(&self) -> &str {
        "file"
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<()> {
        let entry = Entry {
            value,
            expires_at: expiry(ttl)?,
        };
        self.write_entry(key, &entry).await
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_entry(key).await?.map(|entry| entry.value))
    }

    /// Rewrites the file with a new expiry only while it still holds
    /// the entry read here. Another process writing between the check
    /// and the rename can still be overwritten with the older value.
    async fn touch(&self, key: &str, ttl: Duration) -> Result<bool> {
        let Some(entry) = self.read_entry(key).await? else {
            return Ok(false);
        };
        let refreshed = Entry {
            value: entry.value.clone(),
            expires_at: expiry(ttl)?,
        };

        match self.read_entry(key).await? {
            Some(current) if current == entry => {
                self.write_entry(key, &refreshed).await?;
                Ok(true)
            }
            // replaced meanwhile; that write set its own expiry
            Some(_) => Ok(true),
            None => Ok(false),
        }
    }

    async fn delete(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.entry_path(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Filesystem-safe key: everything but unreserved characters is
/// percent-encoded, so distinct keys never share a file
fn encode_key(key: &str) -> String {
    urlencoding::encode(key).into_owned()
}
