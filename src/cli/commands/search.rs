//! Search command - rank documents and start a paging session

use crate::chat::ChatAdapter;
use crate::cli::commands::language;
use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::error::KbError;
use crate::core::services::Services;
use crate::core::types::{SearchHit, SessionItem};
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query (free text, any supported language)
    pub query: String,

    /// User whose paging session receives the results
    #[arg(long, short = 'u', env = "KBSEEK_USER", default_value = "0")]
    pub user: i64,

    /// Language of the query and of the returned titles
    #[arg(long, short = 'l')]
    pub lang: Option<String>,

    /// Maximum number of results to list (all are kept for paging)
    #[arg(long, short = 'k', default_value = "10")]
    pub limit: usize,
}

/// Search result item
#[derive(Debug, Serialize)]
pub struct SearchResultItem {
    pub rank: usize,
    pub title: String,
    pub doc_ref: String,
    pub score: usize,
    pub snippet: String,
}

/// Search response
#[derive(Debug, Serialize)]
pub struct SearchResponseOutput {
    pub query: String,
    pub lang: String,
    pub user: i64,
    pub total_results: usize,
    pub results: Vec<SearchResultItem>,
}

/// Execute the search command
pub async fn execute(
    args: SearchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.query.trim().is_empty() {
        return Err(KbError::InvalidQuery("query must not be empty".to_string()).into());
    }
    let lang = language(args.lang.as_deref(), services);

    if format == OutputFormat::Chat {
        let adapter = ChatAdapter::new(Arc::clone(services));
        let reply = adapter.handle_query(args.user, &args.query, &lang).await;
        output::print_chat_reply(&reply);
        return Ok(());
    }

    let hits: Vec<SearchHit> = services.search.search(&args.query, &lang);
    let total_results = hits.len();
    let results: Vec<SearchResultItem> = hits
        .iter()
        .take(args.limit.max(1))
        .enumerate()
        .map(|(i, hit)| SearchResultItem {
            rank: i + 1,
            title: hit.title.clone(),
            doc_ref: hit.doc_ref.to_string(),
            score: hit.score,
            snippet: hit.snippet.clone(),
        })
        .collect();

    let items = hits.into_iter().map(SessionItem::from).collect();
    let first_page = services.paginator.start(args.user, items).await;

    let response = SearchResponseOutput {
        query: args.query.clone(),
        lang,
        user: args.user,
        total_results,
        results,
    };

    match format {
        OutputFormat::Human => {
            if response.results.is_empty() {
                println!("No results found for '{}'", colors::label(&args.query));
                if services.index.snapshot().is_empty() {
                    output::print_warning(&format!(
                        "Knowledge base is empty; check {:?}",
                        services.config.content.path
                    ));
                }
            } else {
                println!(
                    "Found {} result(s) for '{}':\n",
                    colors::number(&response.total_results.to_string()),
                    colors::label(&args.query)
                );

                for result in &response.results {
                    println!(
                        "[{}] {} {} {}",
                        colors::rank(&result.rank.to_string()),
                        colors::label(&result.title),
                        colors::doc_ref(&result.doc_ref),
                        colors::score(&format!("(score: {})", result.score))
                    );
                    if !result.snippet.is_empty() {
                        println!(
                            "    {}",
                            colors::dim(&output::truncate_line(&result.snippet, 100))
                        );
                    }
                }

                if let Some(page) = first_page {
                    println!(
                        "\n{} Use 'kbseek next --user {}' to page through them.",
                        colors::dim(&format!("Page {} of {}.", page.position, page.total_count)),
                        response.user
                    );
                }
            }
        }
        OutputFormat::Json | OutputFormat::Chat => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
