//! Error types and error handling for the kbseek core.
//!
//! This module defines the error types used throughout the
//! application. The public search, resolve and paging operations
//! never return these to callers; they log them and fall back to an
//! empty result, `None` or a safe "not found" text instead.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for kbseek operations
pub type Result<T> = std::result::Result<T, KbError>;

/// Main error type for the kbseek core
#[derive(Error, Debug)]
pub enum KbError {
    #[error("Failed to load content store: {0}")]
    ContentLoad(String),

    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    #[error("Invalid document reference: {0}")]
    InvalidDocumentRef(String),

    #[error("Session not found: {0}")]
    SessionNotFound(String),

    #[error("Media file not found: {0:?}")]
    MediaNotFound(PathBuf),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Invalid callback data: {0}")]
    InvalidCallback(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl KbError {
    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            KbError::DocumentNotFound(_) | KbError::SessionNotFound(_) | KbError::MediaNotFound(_)
        )
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            KbError::InvalidDocumentRef(_)
                | KbError::InvalidQuery(_)
                | KbError::InvalidCallback(_)
                | KbError::ConfigError(_)
        )
    }
}
