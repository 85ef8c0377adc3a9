//! Core domain logic (transport-agnostic)
//!
//! This module contains all logic that is independent of how users
//! reach it (chat platform, command line).
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Shared data structures
//! - **xdg**: XDG directory handling
//! - **content**: Knowledge file loading and localized documents
//! - **indexer**: Tokenizer, inverted index, swappable snapshot
//! - **search**: Token-overlap ranking
//! - **resolver**: Document formatting and media lookup
//! - **storage**: TTL session backends and the session store
//! - **pagination**: Cursor paging over sessions
//! - **messages**: Localized system messages
//! - **services**: Unified service container

pub mod config;
pub mod content;
pub mod error;
pub mod indexer;
pub mod messages;
pub mod pagination;
pub mod resolver;
pub mod search;
pub mod services;
pub mod storage;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{KbError, Result};
pub use services::Services;
