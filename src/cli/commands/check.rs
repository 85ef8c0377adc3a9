//! Check command - reload the knowledge file and report what was indexed

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::{ContentStats, LanguageIndexStats};
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {}

#[derive(Debug, Serialize)]
pub struct CheckOutput {
    pub content_path: String,
    pub content: ContentStats,
    pub index: Vec<LanguageIndexStats>,
}

/// Execute the check command.
///
/// Fails when the knowledge file cannot be read or parsed, which the
/// normal startup path only logs.
pub async fn execute(
    _args: CheckArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    services.reload()?;

    let snapshot = services.index.snapshot();
    let result = CheckOutput {
        content_path: services.config.content.path.display().to_string(),
        content: snapshot.store.stats(),
        index: snapshot.index.stats(),
    };

    match format {
        OutputFormat::Human | OutputFormat::Chat => {
            println!(
                "{} {}",
                colors::label("Loaded"),
                colors::file_path(&result.content_path)
            );
            println!(
                "  {} documents in {} categories",
                colors::number(&result.content.documents.to_string()),
                colors::number(&result.content.categories.to_string())
            );
            for lang in &result.index {
                if lang.distinct_tokens == 0 {
                    output::print_warning(&format!(
                        "No text indexed for language '{}'",
                        lang.language
                    ));
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
