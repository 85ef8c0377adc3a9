//! Inline keyboards attached to chat replies.

use crate::chat::callback::Callback;
use crate::core::content::DocumentRef;
use crate::core::messages::{self, Message};
use crate::core::types::{CategoryEntry, Page};
use serde::{Deserialize, Serialize};

/// One inline button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    pub text: String,
    pub callback_data: String,
}

impl Button {
    pub fn new(text: impl Into<String>, callback: &Callback) -> Self {
        Self {
            text: text.into(),
            callback_data: callback.to_string(),
        }
    }
}

/// Rows of inline buttons, serialized in the platform's markup shape
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyboard {
    #[serde(rename = "inline_keyboard")]
    pub rows: Vec<Vec<Button>>,
}

impl Keyboard {
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|row| row.is_empty())
    }

    fn push_row(&mut self, row: Vec<Button>) {
        if !row.is_empty() {
            self.rows.push(row);
        }
    }
}

/// Keyboard for one result page.
///
/// Row 1 opens the document behind a hit. Row 2 moves between pages
/// around a `position/total` indicator. Row 3 returns to the main menu.
pub fn pagination(page: &Page, lang: &str) -> Keyboard {
    let mut keyboard = Keyboard::default();

    if let Some(doc_ref) = page.item.doc_ref() {
        keyboard.push_row(vec![Button::new(
            messages::text(Message::View, lang),
            &Callback::Item(doc_ref.clone()),
        )]);
    }

    let mut nav = Vec::new();
    if page.has_previous() {
        nav.push(Button::new(
            messages::text(Message::Previous, lang),
            &Callback::PreviousPage,
        ));
    }
    if page.total_count > 1 {
        nav.push(Button::new(
            format!("{}/{}", page.position, page.total_count),
            &Callback::Noop,
        ));
    }
    if page.has_next() {
        nav.push(Button::new(
            messages::text(Message::Next, lang),
            &Callback::NextPage,
        ));
    }
    keyboard.push_row(nav);

    keyboard.push_row(vec![back(lang, &Callback::MainMenu)]);
    keyboard
}

/// One button per category
pub fn main_menu(categories: &[String]) -> Keyboard {
    let mut keyboard = Keyboard::default();
    for category in categories {
        keyboard.push_row(vec![Button::new(
            category.clone(),
            &Callback::Category(category.clone()),
        )]);
    }
    keyboard
}

/// One button per item of a category, then back to the main menu
pub fn category_menu(entries: &[CategoryEntry], lang: &str) -> Keyboard {
    let mut keyboard = Keyboard::default();
    for entry in entries {
        keyboard.push_row(vec![Button::new(
            entry.title.clone(),
            &Callback::Item(entry.doc_ref.clone()),
        )]);
    }
    keyboard.push_row(vec![back(lang, &Callback::MainMenu)]);
    keyboard
}

/// Back to the document's category
pub fn document(doc_ref: &DocumentRef, lang: &str) -> Keyboard {
    Keyboard {
        rows: vec![vec![back(
            lang,
            &Callback::Category(doc_ref.category_key().to_string()),
        )]],
    }
}

fn back(lang: &str, target: &Callback) -> Button {
    Button::new(messages::text(Message::Back, lang), target)
}
