//! Word tokenizer shared by indexing and querying.
//!
//! Text is lower-cased and split on anything that is not a Unicode
//! word character, so Latin, Persian and accented Italian text all
//! tokenize the same way. Matching works on `char` boundaries and
//! never slices inside a multi-byte sequence.

use once_cell::sync::Lazy;
use regex::Regex;

// Unicode-aware: letters, marks, digits and connector punctuation
static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

/// Split `text` into lower-case word tokens, in order, duplicates kept
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD.find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}
