//! PostgreSQL implementation of UserRepository.
//!
//! Passwords are hashed with bcrypt on the blocking pool before they reach
//! the database. Email uniqueness is enforced by the `users_uc_email`
//! constraint rather than a prior lookup.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{StorageError, Timestamp, UserId};
use crate::domain::user::{PasswordHasher, User, UserError};
use crate::ports::UserRepository;

/// Unique constraint guarding `users.email`.
const EMAIL_CONSTRAINT: &str = "users_uc_email";

/// PostgreSQL implementation of UserRepository.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
    hasher: PasswordHasher,
}

impl PostgresUserRepository {
    /// Creates a repository hashing at the default bcrypt cost.
    pub fn new(pool: PgPool) -> Self {
        Self::with_hasher(pool, PasswordHasher::default())
    }

    pub fn with_hasher(pool: PgPool, hasher: PasswordHasher) -> Self {
        Self { pool, hasher }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, name: &str, email: &str, password: &str) -> Result<UserId, UserError> {
        let hashed = self.hasher.hash_blocking(password.to_string()).await?;

        let row = sqlx::query(
            r#"
            INSERT INTO users (name, email, hashed_password, created)
            VALUES ($1, $2, $3, now())
            RETURNING id
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(hashed)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_email_conflict(&e) {
                UserError::DuplicateEmail
            } else {
                StorageError::query(format!("Failed to insert user: {}", e)).into()
            }
        })?;

        let id: i64 = row.try_get("id").map_err(StorageError::decode)?;
        Ok(UserId::from_i64(id))
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<(UserId, String), UserError> {
        let row = sqlx::query("SELECT id, name, hashed_password FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StorageError::query(format!("Failed to fetch credentials: {}", e)))?;

        let Some(row) = row else {
            self.hasher.verify_missing_blocking(password.to_string()).await?;
            return Err(UserError::InvalidCredentials);
        };

        let id: i64 = row.try_get("id").map_err(StorageError::decode)?;
        let name: String = row.try_get("name").map_err(StorageError::decode)?;
        let hashed: String = row.try_get("hashed_password").map_err(StorageError::decode)?;

        if !self.hasher.verify_blocking(password.to_string(), hashed).await? {
            return Err(UserError::InvalidCredentials);
        }

        Ok((UserId::from_i64(id), name))
    }

    async fn get(&self, id: UserId) -> Result<Option<User>, StorageError> {
        let row = sqlx::query("SELECT id, name, email, created FROM users WHERE id = $1")
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StorageError::query(format!("Failed to fetch user: {}", e)))?;

        row.map(row_to_user).transpose()
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn is_email_conflict(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => db.constraint() == Some(EMAIL_CONSTRAINT),
        _ => false,
    }
}

fn row_to_user(row: PgRow) -> Result<User, StorageError> {
    let id: i64 = row.try_get("id").map_err(StorageError::decode)?;
    let name: String = row.try_get("name").map_err(StorageError::decode)?;
    let email: String = row.try_get("email").map_err(StorageError::decode)?;
    let created: chrono::DateTime<chrono::Utc> =
        row.try_get("created").map_err(StorageError::decode)?;

    Ok(User {
        id: UserId::from_i64(id),
        name,
        email,
        created: Timestamp::from_datetime(created),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_database_errors_are_not_conflicts() {
        assert!(!is_email_conflict(&sqlx::Error::RowNotFound));
        assert!(!is_email_conflict(&sqlx::Error::PoolTimedOut));
    }
}
