//! Document indexing module.
//!
//! Builds the per-language inverted index from the content store:
//!
//! - Unicode-aware tokenizer shared with query parsing
//! - `InvertedIndex`: `language -> token -> [DocumentRef]`
//! - `IndexHandle`: immutable snapshots swapped atomically on reload

pub mod inverted;
pub mod snapshot;
pub mod tokenizer;

pub use inverted::InvertedIndex;
pub use snapshot::{IndexHandle, Snapshot};
pub use tokenizer::tokenize;
