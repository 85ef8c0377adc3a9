//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a specific CLI command.

pub mod browse;
pub mod check;
pub mod completions;
pub mod config;
pub mod page;
pub mod search;
pub mod show;
pub mod stats;

// Re-export argument types for use in mod.rs
pub use browse::BrowseArgs;
pub use check::CheckArgs;
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use page::PageArgs;
pub use search::SearchArgs;
pub use show::ShowArgs;
pub use stats::StatsArgs;

use crate::core::services::Services;

/// Requested language, or the configured default
pub(crate) fn language(requested: Option<&str>, services: &Services) -> String {
    requested
        .map(|lang| lang.trim().to_lowercase())
        .filter(|lang| !lang.is_empty())
        .unwrap_or_else(|| services.config.content.default_language.clone())
}
