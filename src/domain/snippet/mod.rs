//! Snippet module - short-lived text snippets.

mod expiry;

pub use expiry::{ExpiryPeriod, InvalidExpiry};

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SnippetId, Timestamp};

/// A stored snippet. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub id: SnippetId,
    pub title: String,
    pub content: String,
    pub created: Timestamp,
    pub expires: Timestamp,
}

impl Snippet {
    /// Maximum title length in characters.
    pub const MAX_TITLE_LEN: usize = 100;

    /// True once `expires` is at or before `now`.
    pub fn is_expired_at(&self, now: &Timestamp) -> bool {
        !self.expires.is_after(now)
    }
}
