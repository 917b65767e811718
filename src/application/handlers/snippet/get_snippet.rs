//! Snippet queries - single snippet and the latest listing.

use std::sync::Arc;

use crate::domain::foundation::{SnippetId, StorageError};
use crate::domain::snippet::Snippet;
use crate::ports::SnippetRepository;

/// Handler for showing one snippet.
pub struct GetSnippetHandler {
    repository: Arc<dyn SnippetRepository>,
}

impl GetSnippetHandler {
    pub fn new(repository: Arc<dyn SnippetRepository>) -> Self {
        Self { repository }
    }

    /// Returns `None` for ids that can never exist as well as missing or
    /// expired snippets.
    pub async fn handle(&self, id: SnippetId) -> Result<Option<Snippet>, StorageError> {
        if id.as_i64() < 1 {
            return Ok(None);
        }
        self.repository.get(id).await
    }
}

/// Handler for the home page listing.
pub struct LatestSnippetsHandler {
    repository: Arc<dyn SnippetRepository>,
}

impl LatestSnippetsHandler {
    pub fn new(repository: Arc<dyn SnippetRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<Snippet>, StorageError> {
        self.repository.latest().await
    }
}
