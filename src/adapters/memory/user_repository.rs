//! In-memory implementation of UserRepository.
//!
//! Stores real bcrypt hashes so credential checks behave like the
//! PostgreSQL adapter.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{StorageError, Timestamp, UserId};
use crate::domain::user::{PasswordHasher, User, UserError};
use crate::ports::UserRepository;

struct StoredUser {
    user: User,
    hashed_password: String,
}

#[derive(Default)]
struct State {
    next_id: i64,
    users: Vec<StoredUser>,
}

/// In-memory user store.
#[derive(Default)]
pub struct InMemoryUserRepository {
    state: RwLock<State>,
    hasher: PasswordHasher,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a custom hasher, typically a low bcrypt cost in tests.
    pub fn with_hasher(hasher: PasswordHasher) -> Self {
        Self {
            state: RwLock::default(),
            hasher,
        }
    }

    /// The stored hash for an email, if registered.
    pub async fn hashed_password(&self, email: &str) -> Option<String> {
        self.state
            .read()
            .await
            .users
            .iter()
            .find(|u| u.user.email == email)
            .map(|u| u.hashed_password.clone())
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, name: &str, email: &str, password: &str) -> Result<UserId, UserError> {
        let hashed_password = self.hasher.hash_blocking(password.to_string()).await?;

        let mut state = self.state.write().await;
        if state.users.iter().any(|u| u.user.email == email) {
            return Err(UserError::DuplicateEmail);
        }
        state.next_id += 1;
        let id = UserId::from_i64(state.next_id);
        state.users.push(StoredUser {
            user: User {
                id,
                name: name.to_string(),
                email: email.to_string(),
                created: Timestamp::now(),
            },
            hashed_password,
        });
        Ok(id)
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<(UserId, String), UserError> {
        let found = {
            let state = self.state.read().await;
            state
                .users
                .iter()
                .find(|u| u.user.email == email)
                .map(|u| (u.user.id, u.user.name.clone(), u.hashed_password.clone()))
        };

        let Some((id, name, hashed)) = found else {
            self.hasher.verify_missing_blocking(password.to_string()).await?;
            return Err(UserError::InvalidCredentials);
        };

        if !self.hasher.verify_blocking(password.to_string(), hashed).await? {
            return Err(UserError::InvalidCredentials);
        }
        Ok((id, name))
    }

    async fn get(&self, id: UserId) -> Result<Option<User>, StorageError> {
        Ok(self
            .state
            .read()
            .await
            .users
            .iter()
            .find(|u| u.user.id == id)
            .map(|u| u.user.clone()))
    }

    async fn close(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo() -> InMemoryUserRepository {
        InMemoryUserRepository::with_hasher(PasswordHasher::new(4))
    }

    #[tokio::test]
    async fn insert_stores_hash_not_password() {
        let repo = repo();
        repo.insert("Bob", "bob@example.com", "validPa$$word").await.unwrap();

        let hash = repo.hashed_password("bob@example.com").await.unwrap();
        assert_eq!(hash.len(), 60);
        assert_ne!(hash, "validPa$$word");
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let repo = repo();
        repo.insert("Bob", "dupe@example.com", "validPa$$word").await.unwrap();

        let result = repo.insert("Rob", "dupe@example.com", "otherPa$$word").await;
        assert!(matches!(result, Err(UserError::DuplicateEmail)));

        let other = repo.insert("Rob", "rob@example.com", "otherPa$$word").await;
        assert!(other.is_ok());
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn authenticate_checks_password() {
        let repo = repo();
        let id = repo.insert("Bob", "bob@example.com", "validPa$$word").await.unwrap();

        let (found, name) = repo.authenticate("bob@example.com", "validPa$$word").await.unwrap();
        assert_eq!(found, id);
        assert_eq!(name, "Bob");

        let wrong = repo.authenticate("bob@example.com", "wrongPa$$word").await;
        assert!(matches!(wrong, Err(UserError::InvalidCredentials)));

        let unknown = repo.authenticate("nobody@example.com", "validPa$$word").await;
        assert!(matches!(unknown, Err(UserError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn unknown_email_costs_as_much_as_wrong_password() {
        use std::time::{Duration, Instant};

        let repo = InMemoryUserRepository::with_hasher(PasswordHasher::new(8));
        repo.insert("Bob", "bob@example.com", "validPa$$word").await.unwrap();

        let mut wrong = Duration::ZERO;
        let mut unknown = Duration::ZERO;
        for _ in 0..3 {
            let start = Instant::now();
            let _ = repo.authenticate("bob@example.com", "wrongPa$$word").await;
            wrong += start.elapsed();

            let start = Instant::now();
            let _ = repo.authenticate("nobody@example.com", "wrongPa$$word").await;
            unknown += start.elapsed();
        }

        // Both paths run one bcrypt derivation at cost 8.
        assert!(
            unknown * 3 > wrong,
            "unknown email took {:?}, wrong password took {:?}",
            unknown,
            wrong
        );
    }

    #[tokio::test]
    async fn get_returns_user_or_none() {
        let repo = repo();
        let id = repo.insert("Bob", "bob@example.com", "validPa$$word").await.unwrap();

        let user = repo.get(id).await.unwrap().unwrap();
        assert_eq!(user.email, "bob@example.com");
        assert!(repo.get(UserId::from_i64(42)).await.unwrap().is_none());
    }
}
