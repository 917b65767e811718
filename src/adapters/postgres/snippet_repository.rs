//! PostgreSQL implementation of SnippetRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{SnippetId, StorageError, Timestamp};
use crate::domain::snippet::{ExpiryPeriod, Snippet};
use crate::ports::{SnippetRepository, LATEST_LIMIT};

/// PostgreSQL implementation of SnippetRepository.
#[derive(Clone)]
pub struct PostgresSnippetRepository {
    pool: PgPool,
}

impl PostgresSnippetRepository {
    /// Creates a new PostgresSnippetRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SnippetRepository for PostgresSnippetRepository {
    async fn insert(
        &self,
        title: &str,
        content: &str,
        expires: ExpiryPeriod,
    ) -> Result<SnippetId, StorageError> {
        let row = sqlx::query(
            r#"
            INSERT INTO snippets (title, content, created, expires)
            VALUES ($1, $2, now(), now() + make_interval(days => $3))
            RETURNING id
            "#,
        )
        .bind(title)
        .bind(content)
        .bind(expires.days())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StorageError::query(format!("Failed to insert snippet: {}", e)))?;

        let id: i64 = row.try_get("id").map_err(StorageError::decode)?;
        Ok(SnippetId::from_i64(id))
    }

    async fn get(&self, id: SnippetId) -> Result<Option<Snippet>, StorageError> {
        let row = sqlx::query(
            r#"
            SELECT id, title, content, created, expires
            FROM snippets
            WHERE expires > now() AND id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StorageError::query(format!("Failed to fetch snippet: {}", e)))?;

        row.map(row_to_snippet).transpose()
    }

    async fn latest(&self) -> Result<Vec<Snippet>, StorageError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, content, created, expires
            FROM snippets
            WHERE expires > now()
            ORDER BY created DESC
            LIMIT $1
            "#,
        )
        .bind(LATEST_LIMIT as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::query(format!("Failed to fetch latest snippets: {}", e)))?;

        rows.into_iter().map(row_to_snippet).collect()
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn row_to_snippet(row: PgRow) -> Result<Snippet, StorageError> {
    let id: i64 = row.try_get("id").map_err(StorageError::decode)?;
    let title: String = row.try_get("title").map_err(StorageError::decode)?;
    let content: String = row.try_get("content").map_err(StorageError::decode)?;
    let created: chrono::DateTime<chrono::Utc> =
        row.try_get("created").map_err(StorageError::decode)?;
    let expires: chrono::DateTime<chrono::Utc> =
        row.try_get("expires").map_err(StorageError::decode)?;

    Ok(Snippet {
        id: SnippetId::from_i64(id),
        title,
        content,
        created: Timestamp::from_datetime(created),
        expires: Timestamp::from_datetime(expires),
    })
}
