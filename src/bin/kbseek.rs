//! kbseek CLI - search a multilingual knowledge base from the terminal
//!
//! # Examples
//!
//! ```bash
//! # Search and start paging
//! kbseek search "housing contract" --user 42 --lang en
//!
//! # Page through the results
//! kbseek next --user 42
//! kbseek prev --user 42
//!
//! # Open a document
//! kbseek show housing:contract --lang it
//!
//! # Preview what a chat user would receive
//! kbseek --format chat search "permesso" --user 42 --lang it
//! ```

use clap::Parser;
use kbseek::cli::{exit_code, init_logging, run, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_json);

    if let Err(e) = run(cli).await {
        kbseek::cli::output::print_error(&e.to_string());
        std::process::exit(exit_code(e.as_ref()));
    }
}
