//! kbseek - Multilingual knowledge-base search with paged results
//!
//! Loads a categorized, multilingual knowledge file, builds a
//! per-language inverted index over it, ranks documents by query
//! token overlap and serves results one page at a time from a
//! per-user session kept in a TTL store.
//!
//! # Architecture
//!
//! The codebase is organized into three main modules:
//!
//! - **core**: Domain logic (transport-agnostic)
//!   - config, error, types, xdg, messages
//!   - content (knowledge file, localized fields)
//!   - indexer, search, resolver
//!   - storage, pagination (sessions)
//!   - services (unified service container)
//!
//! - **chat**: Chat boundary (depends on core)
//!   - MarkdownV2 escaping, keyboards, callback routing
//!
//! - **cli**: Command-line adapter (depends on core and chat)

// Core domain logic
pub mod core;

// Chat platform boundary
pub mod chat;

// Command-line interface
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::content::{ContentStore, Document, DocumentRef, LocalizedField};
pub use core::error::{KbError, Result};
pub use core::pagination::{Paginator, Step};
pub use core::services::Services;
pub use core::storage::{FileBackend, MemoryBackend, SessionBackend, SessionStore};
pub use core::types::*;
