//! Chat boundary for kbseek
//!
//! Turns core results into replies a chat transport can send as-is:
//! MarkdownV2 text, an inline keyboard and an optional media file.
//! Sending them is left to the transport.
//!
//! ```text
//! text message  -> handle_query    -> search -> session -> first page
//! button press  -> handle_callback -> page move | menu | document
//! ```

pub mod callback;
pub mod keyboard;
pub mod markdown;

pub use callback::Callback;
pub use keyboard::{Button, Keyboard};

use crate::core::content::DocumentRef;
use crate::core::messages::{self, Message};
use crate::core::services::Services;
use crate::core::types::{Page, SessionItem};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// A reply ready for the chat platform
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatReply {
    /// MarkdownV2 text
    pub text: String,
    pub keyboard: Keyboard,
    /// File to attach, already checked to exist
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<PathBuf>,
}

impl ChatReply {
    fn text(text: String) -> Self {
        Self {
            text,
            keyboard: Keyboard::default(),
            media: None,
        }
    }

    fn message(message: Message, lang: &str) -> Self {
        Self::text(markdown::sanitize(messages::text(message, lang)))
    }
}

/// Routes user input through the core services
pub struct ChatAdapter {
    services: Arc<Services>,
}

impl ChatAdapter {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }

    /// Search for `query` and show the first hit.
    ///
    /// A search with no hits clears the user's previous results.
    pub async fn handle_query(&self, user_id: i64, query: &str, lang: &str) -> ChatReply {
        if self.services.index.snapshot().is_empty() {
            return ChatReply::message(Message::KnowledgeBaseUnavailable, lang);
        }

        let hits = self.services.search.search(query, lang);
        let items: Vec<SessionItem> = hits.into_iter().map(SessionItem::from).collect();
        match self.services.paginator.start(user_id, items).await {
            Some(page) => render_page(&page, lang),
            None => ChatReply::message(Message::NoResults, lang),
        }
    }

    /// React to a button press. Returns `None` when nothing should be
    /// sent back, as for indicator buttons.
    pub async fn handle_callback(&self, user_id: i64, data: &str, lang: &str) -> Option<ChatReply> {
        let callback = match Callback::parse(data) {
            Ok(callback) => callback,
            Err(e) => {
                tracing::warn!("Ignoring callback from user {}: {}", user_id, e);
                return None;
            }
        };

        let paginator = &self.services.paginator;
        let reply = match callback {
            Callback::Noop => return None,
            Callback::NextPage | Callback::PreviousPage => {
                let moved = if callback == Callback::NextPage {
                    paginator.next(user_id).await
                } else {
                    paginator.previous(user_id).await
                };
                // past either end the current page is shown again
                match moved {
                    Some(page) => render_page(&page, lang),
                    None => match paginator.get_current(user_id).await {
                        Some(page) => render_page(&page, lang),
                        None => ChatReply::message(Message::SessionExpired, lang),
                    },
                }
            }
            Callback::MainMenu => self.main_menu(lang),
            Callback::Category(key) => self.category(&key, lang),
            Callback::Item(doc_ref) => self.document(&doc_ref, lang),
        };
        Some(reply)
    }

    /// One document with a way back to its category
    pub fn document(&self, doc_ref: &DocumentRef, lang: &str) -> ChatReply {
        let resolved = self.services.resolver.resolve_ref(doc_ref, lang);
        ChatReply {
            text: markdown::sanitize(&resolved.text),
            keyboard: keyboard::document(doc_ref, lang),
            media: resolved.media_path,
        }
    }

    /// Category list
    pub fn main_menu(&self, lang: &str) -> ChatReply {
        let snapshot = self.services.index.snapshot();
        if snapshot.is_empty() {
            return ChatReply::message(Message::KnowledgeBaseUnavailable, lang);
        }
        ChatReply {
            text: markdown::sanitize(messages::text(Message::ChooseCategory, lang)),
            keyboard: keyboard::main_menu(snapshot.store.categories()),
            media: None,
        }
    }

    /// Items of one category
    pub fn category(&self, key: &str, lang: &str) -> ChatReply {
        let snapshot = self.services.index.snapshot();
        let entries =
            snapshot
                .store
                .category_items(key, lang, self.services.index.default_language());
        if entries.is_empty() {
            tracing::warn!("Category '{}' not found", key);
            return ChatReply::message(Message::NotFound, lang);
        }
        ChatReply {
            text: markdown::sanitize(messages::text(Message::ChooseItem, lang)),
            keyboard: keyboard::category_menu(&entries, lang),
            media: None,
        }
    }
}

/// Shortest snippet worth sending after a cut title
const MIN_SNIPPET_CHARS: usize = 16;

/// Text and keyboard for one result page. Only the body is cut to fit,
/// so the page indicator always arrives intact.
pub fn render_page(page: &Page, lang: &str) -> ChatReply {
    let indicator = markdown::italic(&messages::page_indicator(
        lang,
        page.position,
        page.total_count,
    ));
    let budget = markdown::MAX_MESSAGE_CHARS.saturating_sub(indicator.chars().count() + 2);

    let body = match &page.item {
        SessionItem::Hit(hit) => {
            let title = format!(
                "*{}*",
                markdown::truncate(&markdown::escape(&hit.title), budget.saturating_sub(2))
            );
            let room = budget.saturating_sub(title.chars().count() + 2);
            if hit.snippet.is_empty() || room < MIN_SNIPPET_CHARS {
                title
            } else {
                format!(
                    "{title}\n\n{}",
                    markdown::truncate(&markdown::escape(&hit.snippet), room)
                )
            }
        }
        SessionItem::Snippet { text } => {
            markdown::truncate(&markdown::escape(&text.replace('\r', "")), budget)
        }
    };

    ChatReply {
        text: format!("{body}\n\n{indicator}"),
        keyboard: keyboard::pagination(page, lang),
        media: None,
    }
}
