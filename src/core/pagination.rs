//! Serves one result at a time from a user's paging session.
//!
//! Every method returns `None` for "nothing to show": no session, an
//! expired one, a move past either end, or a storage failure (logged).

use crate::core::error::Result;
use crate::core::storage::{SessionStore, StoredSession};
use crate::core::types::{Page, SessionItem};
use std::sync::Arc;

/// Direction of a page move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Forward,
    Back,
}

impl Step {
    fn apply(self, cursor: usize) -> Option<usize> {
        match self {
            Step::Forward => cursor.checked_add(1),
            Step::Back => cursor.checked_sub(1),
        }
    }
}

/// Cursor paging over [`SessionStore`]
pub struct Paginator {
    sessions: Arc<SessionStore>,
}

impl Paginator {
    pub fn new(sessions: Arc<SessionStore>) -> Self {
        Self { sessions }
    }

    pub fn sessions(&self) -> &Arc<SessionStore> {
        &self.sessions
    }

    /// Start a new session and return its first page.
    ///
    /// Empty `results` clear any previous session and return `None`.
    pub async fn start(&self, user_id: i64, results: Vec<SessionItem>) -> Option<Page> {
        if let Err(e) = self.sessions.create_session(user_id, results).await {
            tracing::warn!("Failed to create session for user {}: {}", user_id, e);
            return None;
        }
        self.get_current(user_id).await
    }

    /// Page at the stored cursor; refreshes the session TTL.
    ///
    /// Only the expiry is rewritten, so a read never puts back a
    /// cursor that a concurrent `advance` already moved.
    pub async fn get_current(&self, user_id: i64) -> Option<Page> {
        let session = self.load(user_id).await?;
        if let Err(e) = self.sessions.touch(user_id).await {
            tracing::warn!("Failed to refresh session for user {}: {}", user_id, e);
        }
        page_at(&session, session.cursor)
    }

    /// Move the cursor one step and return the page there.
    ///
    /// A move outside the list returns `None` and leaves the stored
    /// session untouched. The update is a whole-value read-modify-write,
    /// so two concurrent moves for one user may lose one of them.
    pub async fn advance(&self, user_id: i64, step: Step) -> Option<Page> {
        let mut session = self.load(user_id).await?;

        let cursor = step
            .apply(session.cursor)
            .filter(|c| *c < session.results.len());
        let Some(cursor) = cursor else {
            tracing::debug!(
                "User {} cannot move {:?} from {}/{}",
                user_id,
                step,
                session.cursor + 1,
                session.results.len()
            );
            return None;
        };

        session.cursor = cursor;
        if let Err(e) = self.sessions.save(user_id, &session).await {
            tracing::warn!("Failed to save session for user {}: {}", user_id, e);
            return None;
        }
        page_at(&session, cursor)
    }

    pub async fn next(&self, user_id: i64) -> Option<Page> {
        self.advance(user_id, Step::Forward).await
    }

    pub async fn previous(&self, user_id: i64) -> Option<Page> {
        self.advance(user_id, Step::Back).await
    }

    /// Drop the user's session
    pub async fn clear(&self, user_id: i64) -> Result<()> {
        self.sessions.delete(user_id).await
    }

    async fn load(&self, user_id: i64) -> Option<StoredSession> {
        match self.sessions.load(user_id).await {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!("Failed to load session for user {}: {}", user_id, e);
                None
            }
        }
    }
}

fn page_at(session: &StoredSession, cursor: usize) -> Option<Page> {
    let item = session.results.get(cursor)?.clone();
    Some(Page {
        item,
        position: cursor + 1,
        total_count: session.results.len(),
    })
}
