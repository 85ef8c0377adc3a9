//! Completions command - shell completion scripts for kbseek

use crate::cli::Cli;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

/// Arguments for the completions command
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,

    /// Write the script to this file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

/// Write the completion script for `shell` into `out`
pub fn write_completions(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "kbseek", out);
}

/// Execute the completions command
pub fn execute(args: CompletionsArgs) -> Result<(), Box<dyn std::error::Error>> {
    match &args.output {
        Some(path) => {
            let mut file = File::create(path)?;
            write_completions(args.shell, &mut file);
            file.flush()?;
        }
        None => write_completions(args.shell, &mut io::stdout()),
    }
    Ok(())
}
