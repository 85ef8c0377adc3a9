//! Output formatting for CLI commands
//!
//! Colors for human output and a plain-text preview of chat replies.
//! Coloring is disabled when NO_COLOR is set.

use crate::chat::ChatReply;

/// Color scheme for CLI output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Style for labels/headers
    pub fn label(s: &str) -> ColoredString {
        s.bold()
    }

    /// Style for document references
    pub fn doc_ref(s: &str) -> ColoredString {
        s.cyan()
    }

    /// Style for file paths
    pub fn file_path(s: &str) -> ColoredString {
        s.blue()
    }

    /// Style for numbers/counts
    pub fn number(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for warning messages
    pub fn warning(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for error messages
    pub fn error(s: &str) -> ColoredString {
        s.red().bold()
    }

    /// Style for dim/secondary text
    pub fn dim(s: &str) -> ColoredString {
        s.dimmed()
    }

    /// Style for search scores
    pub fn score(s: &str) -> ColoredString {
        s.magenta()
    }

    /// Style for rank numbers
    pub fn rank(s: &str) -> ColoredString {
        s.green().bold()
    }
}

/// Shorten to `max` characters for one-line display
pub fn truncate_line(s: &str, max: usize) -> String {
    let line = s.lines().next().unwrap_or_default();
    if line.chars().count() > max {
        let head: String = line.chars().take(max.saturating_sub(3)).collect();
        format!("{head}...")
    } else {
        line.to_string()
    }
}

/// Render a chat reply as the transport would receive it
pub fn format_chat_reply(reply: &ChatReply) -> String {
    let mut out = reply.text.clone();
    for row in &reply.keyboard.rows {
        let buttons: Vec<String> = row
            .iter()
            .map(|b| format!("[{} -> {}]", b.text, b.callback_data))
            .collect();
        out.push('\n');
        out.push_str(&buttons.join(" "));
    }
    if let Some(media) = &reply.media {
        out.push_str(&format!("\nmedia: {}", media.display()));
    }
    out
}

pub fn print_chat_reply(reply: &ChatReply) {
    println!("{}", format_chat_reply(reply));
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{}: {}", colors::warning("Warning"), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{}: {}", colors::error("Error"), message);
}

/// Print a header/title
pub fn print_header(title: &str) {
    println!("{}", colors::label(title));
}
