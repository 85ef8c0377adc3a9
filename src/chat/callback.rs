//! Callback data carried by inline buttons.
//!
//! ```text
//! pagination:next            next result page
//! pagination:prev            previous result page
//! menu:main_menu             category list
//! menu:<category>            items of a category
//! menu:<category>:<item>     one document
//! noop                       indicator buttons
//! ```

use crate::core::content::DocumentRef;
use crate::core::error::{KbError, Result};
use std::fmt;

const MAIN_MENU: &str = "main_menu";

/// A parsed button callback
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Callback {
    NextPage,
    PreviousPage,
    MainMenu,
    Category(String),
    Item(DocumentRef),
    Noop,
}

impl Callback {
    pub fn parse(data: &str) -> Result<Self> {
        let data = data.trim();
        match data {
            "noop" => return Ok(Callback::Noop),
            "pagination:next" => return Ok(Callback::NextPage),
            "pagination:prev" => return Ok(Callback::PreviousPage),
            _ => {}
        }

        let Some(path) = data.strip_prefix("menu:") else {
            return Err(KbError::InvalidCallback(data.to_string()));
        };

        match path {
            "" => Err(KbError::InvalidCallback(data.to_string())),
            MAIN_MENU => Ok(Callback::MainMenu),
            _ if path.contains(':') => Ok(Callback::Item(DocumentRef::parse(path)?)),
            _ => Ok(Callback::Category(path.to_string())),
        }
    }
}

impl fmt::Display for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Callback::NextPage => write!(f, "pagination:next"),
            Callback::PreviousPage => write!(f, "pagination:prev"),
            Callback::MainMenu => write!(f, "menu:{MAIN_MENU}"),
            Callback::Category(key) => write!(f, "menu:{key}"),
            Callback::Item(doc_ref) => write!(f, "menu:{doc_ref}"),
            Callback::Noop => write!(f, "noop"),
        }
    }
}
