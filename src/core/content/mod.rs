//! Content Store: the hierarchical, multilingual knowledge tree.
//!
//! - **LocalizedField**: language-code to value map with fallback
//! - **Document / DocumentRef**: one item and its opaque handle
//! - **ContentStore**: tolerant loader and lookup by reference

mod document;
mod localized;
mod store;

pub use document::{Document, DocumentRef, Subsection};
pub use localized::LocalizedField;
pub use store::ContentStore;
