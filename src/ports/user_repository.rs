//! User repository port.

use crate::domain::foundation::{StorageError, UserId};
use crate::domain::user::{User, UserError};
use async_trait::async_trait;

/// Repository port for user accounts.
///
/// Plaintext passwords cross this boundary and are hashed inside it.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Register a user.
    ///
    /// # Errors
    ///
    /// - `DuplicateEmail` if the email is already registered
    /// - `Storage` on persistence or hashing failure
    async fn insert(&self, name: &str, email: &str, password: &str) -> Result<UserId, UserError>;

    /// Check credentials and return the user's id and display name.
    ///
    /// # Errors
    ///
    /// - `InvalidCredentials` for an unknown email or a wrong password
    /// - `Storage` on persistence failure
    async fn authenticate(&self, email: &str, password: &str) -> Result<(UserId, String), UserError>;

    /// Find a user by ID.
    ///
    /// Returns `None` if not found.
    async fn get(&self, id: UserId) -> Result<Option<User>, StorageError>;

    /// Release underlying resources. Called once at shutdown.
    async fn close(&self);
}
