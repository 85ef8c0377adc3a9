//! Search module.
//!
//! Tokenizes a query, pulls candidates from the inverted index and
//! orders them by matched-token count.

mod ranker;

pub use ranker::SearchRanker;
