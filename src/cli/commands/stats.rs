//! Stats command - knowledge base and index statistics

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::{ContentStats, LanguageIndexStats};
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the stats command
#[derive(Args, Debug)]
pub struct StatsArgs {}

/// Stats response
#[derive(Debug, Serialize)]
pub struct StatsOutput {
    pub version: String,
    pub content_path: String,
    pub content: ContentStats,
    pub index: Vec<LanguageIndexStats>,
    pub session_backend: String,
    pub session_ttl_sec: u64,
}

/// Execute the stats command
pub async fn execute(
    _args: StatsArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = services.index.snapshot();
    let sessions = services.paginator.sessions();

    let stats = StatsOutput {
        version: env!("CARGO_PKG_VERSION").to_string(),
        content_path: services.config.content.path.display().to_string(),
        content: snapshot.store.stats(),
        index: snapshot.index.stats(),
        session_backend: sessions.backend_name().to_string(),
        session_ttl_sec: sessions.ttl().as_secs(),
    };

    match format {
        OutputFormat::Human | OutputFormat::Chat => {
            output::print_header(&format!("kbseek v{}", stats.version));
            println!(
                "  Content file: {}",
                colors::file_path(&stats.content_path)
            );
            if stats.content.documents == 0 {
                output::print_warning("Knowledge base is empty or failed to load");
            }
            println!(
                "  Categories: {}",
                colors::number(&stats.content.categories.to_string())
            );
            println!(
                "  Documents: {}",
                colors::number(&stats.content.documents.to_string())
            );
            println!(
                "  Subsections: {}",
                colors::number(&stats.content.subsections.to_string())
            );
            println!(
                "  Title languages: {}",
                stats.content.title_languages.join(", ")
            );
            println!("\n{}", colors::label("Index:"));
            for lang in &stats.index {
                println!(
                    "  {}: {} tokens, {} postings",
                    colors::doc_ref(&lang.language),
                    colors::number(&lang.distinct_tokens.to_string()),
                    colors::number(&lang.postings.to_string())
                );
            }
            println!("\n{}", colors::label("Sessions:"));
            println!("  Backend: {}", stats.session_backend);
            println!("  TTL: {}s", stats.session_ttl_sec);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }

    Ok(())
}
