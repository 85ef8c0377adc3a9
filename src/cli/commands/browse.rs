//! Browse command - walk the category menu

use crate::chat::ChatAdapter;
use crate::cli::commands::language;
use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::error::KbError;
use crate::core::services::Services;
use crate::core::types::CategoryEntry;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the browse command
#[derive(Args, Debug)]
pub struct BrowseArgs {
    /// Category to list; all categories when omitted
    pub category: Option<String>,

    /// Language for item titles
    #[arg(long, short = 'l')]
    pub lang: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CategorySummary {
    pub key: String,
    pub items: usize,
}

/// Execute the browse command
pub async fn execute(
    args: BrowseArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let lang = language(args.lang.as_deref(), services);

    if format == OutputFormat::Chat {
        let adapter = ChatAdapter::new(Arc::clone(services));
        let reply = match &args.category {
            Some(key) => adapter.category(key, &lang),
            None => adapter.main_menu(&lang),
        };
        output::print_chat_reply(&reply);
        return Ok(());
    }

    let snapshot = services.index.snapshot();
    let fallback = services.index.default_language();

    match args.category {
        None => {
            let summaries: Vec<CategorySummary> = snapshot
                .store
                .categories()
                .iter()
                .map(|key| CategorySummary {
                    key: key.clone(),
                    items: snapshot.store.category_items(key, &lang, fallback).len(),
                })
                .collect();

            if format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&summaries)?);
            } else if summaries.is_empty() {
                output::print_warning("Knowledge base has no categories");
            } else {
                output::print_header("Categories:");
                for summary in &summaries {
                    println!(
                        "  {} {}",
                        colors::doc_ref(&summary.key),
                        colors::dim(&format!("({} items)", summary.items))
                    );
                }
            }
        }
        Some(key) => {
            let entries: Vec<CategoryEntry> = snapshot.store.category_items(&key, &lang, fallback);
            if entries.is_empty() {
                return Err(KbError::DocumentNotFound(format!("category '{key}'")).into());
            }

            if format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                output::print_header(&format!("{key}:"));
                for entry in &entries {
                    println!(
                        "  {} {}",
                        colors::doc_ref(entry.doc_ref.as_str()),
                        entry.title
                    );
                }
            }
        }
    }

    Ok(())
}
