//! CLI adapter for kbseek
//!
//! Provides a command-line interface to search, paging and browsing.
//! This module sits beside `chat/`: both depend on `core/`, and the
//! `chat` output format reuses the chat boundary to preview replies.
//!
//! # Architecture
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (domain logic)  |
//!              +--------+---------+
//!                       |
//!          +------------+------------+
//!          |                         |
//!          v                         v
//! +------------------+      +------------------+
//! |      chat/       |<-----|      cli/        |
//! | (reply builder)  |      | (clap adapter)   |
//! +------------------+      +------------------+
//! ```
//!
//! Sessions use the configured backend (files by default), so paging
//! carries over between invocations.

pub mod commands;
pub mod output;

use crate::core::error::KbError;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// kbseek - multilingual knowledge-base search
///
/// Search a categorized knowledge file in several languages and page
/// through the results one at a time.
#[derive(Parser, Debug)]
#[command(name = "kbseek")]
#[command(version)]
#[command(about = "Multilingual knowledge-base search", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
    /// The MarkdownV2 text and keyboard a chat transport would send
    Chat,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the knowledge base and start paging the results
    Search(commands::SearchArgs),

    /// Show the current result page
    Current(commands::PageArgs),

    /// Move to the next result page
    Next(commands::PageArgs),

    /// Move to the previous result page
    Prev(commands::PageArgs),

    /// Show one document by reference (category:item)
    Show(commands::ShowArgs),

    /// List categories, or the items of one category
    Browse(commands::BrowseArgs),

    /// Show knowledge base and index statistics
    Stats(commands::StatsArgs),

    /// Reload the knowledge file and fail if it cannot be loaded
    Check(commands::CheckArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  kbseek completions bash > ~/.local/share/bash-completion/completions/kbseek
    ///   zsh:   kbseek completions zsh > ~/.zfunc/_kbseek
    ///   fish:  kbseek completions fish > ~/.config/fish/completions/kbseek.fish
    Completions(commands::CompletionsArgs),
}

/// Process exit code for a failed command: 2 for invalid input, 3 for
/// a missing document or session, 1 for anything else
pub fn exit_code(err: &(dyn std::error::Error + 'static)) -> i32 {
    match err.downcast_ref::<KbError>() {
        Some(e) if e.is_bad_request() => 2,
        Some(e) if e.is_not_found() => 3,
        _ => 1,
    }
}

/// Initialize tracing on stderr, filtered by `RUST_LOG`
pub fn init_logging(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "kbseek=warn".into());

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::pagination::Step;
    use crate::core::services::Services;
    use crate::core::xdg::XdgDirs;
    use std::sync::Arc;

    // Handle completions command early (doesn't need services)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    // Initialize XDG directories
    let xdg = XdgDirs::new();
    xdg.ensure_dirs_exist()?;

    // Load configuration
    let config = Config::load_with_xdg(&xdg)?;
    config.log_config();

    // Create services
    let services = Arc::new(Services::new(config)?);

    // Execute command
    match cli.command {
        Commands::Search(args) => commands::search::execute(args, &services, cli.format).await,
        Commands::Current(args) => {
            commands::page::execute(args, None, &services, cli.format).await
        }
        Commands::Next(args) => {
            commands::page::execute(args, Some(Step::Forward), &services, cli.format).await
        }
        Commands::Prev(args) => {
            commands::page::execute(args, Some(Step::Back), &services, cli.format).await
        }
        Commands::Show(args) => commands::show::execute(args, &services, cli.format).await,
        Commands::Browse(args) => commands::browse::execute(args, &services, cli.format).await,
        Commands::Stats(args) => commands::stats::execute(args, &services, cli.format).await,
        Commands::Check(args) => commands::check::execute(args, &services, cli.format).await,
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format).await,
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
