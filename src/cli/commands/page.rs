//! Current / next / prev commands - page through the last search

use crate::chat;
use crate::cli::commands::language;
use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::error::KbError;
use crate::core::pagination::Step;
use crate::core::services::Services;
use crate::core::types::{Page, SessionItem};
use clap::Args;
use std::sync::Arc;

/// Arguments shared by the paging commands
#[derive(Args, Debug)]
pub struct PageArgs {
    /// User whose paging session to use
    #[arg(long, short = 'u', env = "KBSEEK_USER", default_value = "0")]
    pub user: i64,

    /// Language for labels in chat output
    #[arg(long, short = 'l')]
    pub lang: Option<String>,
}

/// Execute a paging command; `step` is `None` for the current page
pub async fn execute(
    args: PageArgs,
    step: Option<Step>,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let paginator = &services.paginator;
    let lang = language(args.lang.as_deref(), services);

    let page = match step {
        None => paginator.get_current(args.user).await,
        Some(step) => match paginator.advance(args.user, step).await {
            Some(page) => Some(page),
            None => {
                // cursor is unchanged, so the current page is still valid
                let current = paginator.get_current(args.user).await;
                if let Some(current) = &current {
                    let edge = if step == Step::Forward { "last" } else { "first" };
                    output::print_warning(&format!(
                        "Already at the {} page ({}/{})",
                        edge, current.position, current.total_count
                    ));
                }
                current
            }
        },
    };

    let Some(page) = page else {
        return Err(KbError::SessionNotFound(format!(
            "no results for user {}; run 'kbseek search' first",
            args.user
        ))
        .into());
    };

    match format {
        OutputFormat::Human => print_page(&page),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&page)?),
        OutputFormat::Chat => output::print_chat_reply(&chat::render_page(&page, &lang)),
    }

    Ok(())
}

fn print_page(page: &Page) {
    println!(
        "{} {}",
        colors::label("Result"),
        colors::number(&format!("{}/{}", page.position, page.total_count))
    );
    match &page.item {
        SessionItem::Hit(hit) => {
            println!(
                "  {} {}",
                colors::label(&hit.title),
                colors::doc_ref(hit.doc_ref.as_str())
            );
            if !hit.snippet.is_empty() {
                println!("  {}", colors::dim(&hit.snippet));
            }
            println!(
                "\n{}",
                colors::dim(&format!("Open it with 'kbseek show {}'", hit.doc_ref))
            );
        }
        SessionItem::Snippet { text } => {
            for line in text.lines() {
                println!("  {line}");
            }
        }
    }
}
