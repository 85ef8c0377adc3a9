//! Session storage.
//!
//! Paging sessions live in a TTL-capable key/value backend addressed
//! by user id, so several processes can serve the same users.
//!
//! # Architecture
//!
//! - **SessionBackend**: `set`/`get`/`delete` with per-entry TTL
//! - **MemoryBackend**: in-process map, tokio clock expiry
//! - **FileBackend**: one JSON file per key, atomic replace
//! - **SessionStore**: typed session values on top of a backend
//!
//! # File Backend Layout
//!
//! File names are the URL-encoded key (`urlencoding::encode`) plus
//! `.json`.
//!
//! ```text
//! {session_dir}/
//! ├── pagination%3A42.json    # {"value": "...", "expires_at": "..."}
//! └── pagination%3A77.json
//! ```

mod backend;
mod file;
mod session;

pub use backend::{MemoryBackend, SessionBackend};
pub use file::FileBackend;
pub use session::{SessionStore, StoredSession};
