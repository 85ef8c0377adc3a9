//! MarkdownV2 escaping for chat messages.

/// Longest message text the chat platform accepts, in characters
pub const MAX_MESSAGE_CHARS: usize = 4096;

const SPECIAL: &[char] = &[
    '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
];

const ELLIPSIS: &str = "\\.\\.\\.";

/// Backslash-escape every MarkdownV2 control character
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for c in text.chars() {
        if c == '\\' || SPECIAL.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Escape plain text and fit it into one message
pub fn sanitize(text: &str) -> String {
    truncate(&escape(&text.replace('\r', "")), MAX_MESSAGE_CHARS)
}

pub fn bold(text: &str) -> String {
    format!("*{}*", escape(text))
}

pub fn italic(text: &str) -> String {
    format!("_{}_", escape(text))
}

/// Cut already-escaped text to `max_chars`, ending in an escaped
/// ellipsis. Never leaves a dangling escape backslash.
pub fn truncate(escaped: &str, max_chars: usize) -> String {
    if escaped.chars().count() <= max_chars {
        return escaped.to_string();
    }

    let keep = max_chars.saturating_sub(ELLIPSIS.chars().count());
    let mut head: String = escaped.chars().take(keep).collect();
    let trailing = head.chars().rev().take_while(|c| *c == '\\').count();
    if trailing % 2 == 1 {
        head.pop();
    }
    tracing::warn!("Message truncated to {} characters", max_chars);
    head.push_str(ELLIPSIS);
    head
}
