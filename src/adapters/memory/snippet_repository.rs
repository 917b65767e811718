//! In-memory implementation of SnippetRepository.
//!
//! Honors the same expiry and ordering rules as the PostgreSQL adapter.
//! Used by tests and for running without a database.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{SnippetId, StorageError, Timestamp};
use crate::domain::snippet::{ExpiryPeriod, Snippet};
use crate::ports::{SnippetRepository, LATEST_LIMIT};

#[derive(Default)]
struct State {
    next_id: i64,
    snippets: Vec<Snippet>,
}

/// In-memory snippet store.
#[derive(Default)]
pub struct InMemorySnippetRepository {
    state: RwLock<State>,
}

impl InMemorySnippetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a snippet with explicit timestamps, bypassing the clock.
    pub async fn seed(
        &self,
        title: &str,
        content: &str,
        created: Timestamp,
        expires: Timestamp,
    ) -> SnippetId {
        let mut state = self.state.write().await;
        state.next_id += 1;
        let id = SnippetId::from_i64(state.next_id);
        state.snippets.push(Snippet {
            id,
            title: title.to_string(),
            content: content.to_string(),
            created,
            expires,
        });
        id
    }

    /// Number of stored snippets, expired ones included.
    pub async fn len(&self) -> usize {
        self.state.read().await.snippets.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl SnippetRepository for InMemorySnippetRepository {
    async fn insert(
        &self,
        title: &str,
        content: &str,
        expires: ExpiryPeriod,
    ) -> Result<SnippetId, StorageError> {
        let created = Timestamp::now();
        let expires_at = created.add_days(expires.days().into());
        Ok(self.seed(title, content, created, expires_at).await)
    }

    async fn get(&self, id: SnippetId) -> Result<Option<Snippet>, StorageError> {
        let now = Timestamp::now();
        let state = self.state.read().await;
        Ok(state
            .snippets
            .iter()
            .find(|s| s.id == id && !s.is_expired_at(&now))
            .cloned())
    }

    async fn latest(&self) -> Result<Vec<Snippet>, StorageError> {
        let now = Timestamp::now();
        let state = self.state.read().await;
        let mut live: Vec<Snippet> = state
            .snippets
            .iter()
            .filter(|s| !s.is_expired_at(&now))
            .cloned()
            .collect();
        // Newest first; later ids break ties between equal timestamps.
        live.sort_by(|a, b| b.created.cmp(&a.created).then(b.id.cmp(&a.id)));
        live.truncate(LATEST_LIMIT);
        Ok(live)
    }

    async fn close(&self) {}
}
