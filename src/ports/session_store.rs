//! Session store port.
//!
//! Request-scoped access to the visitor's server-side session. Values are
//! stored as strings; typed data (such as user IDs) is formatted by callers.

use async_trait::async_trait;
use thiserror::Error;

/// Session key holding the logged-in user's ID.
pub const AUTHENTICATED_USER_ID_KEY: &str = "authenticatedUserID";

/// Session key holding the one-shot flash message.
pub const FLASH_KEY: &str = "flash";

/// Session key holding the CSRF token.
pub const CSRF_TOKEN_KEY: &str = "csrf_token";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session store failure: {0}")]
    Store(String),
}

impl SessionError {
    pub fn store(cause: impl std::fmt::Display) -> Self {
        SessionError::Store(cause.to_string())
    }
}

/// Port for reading and writing session values.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Set a value, replacing any previous one.
    async fn put(&self, key: &str, value: String) -> Result<(), SessionError>;

    /// Read a value without removing it.
    async fn get(&self, key: &str) -> Result<Option<String>, SessionError>;

    /// Read a value and remove it in one step.
    async fn pop_once(&self, key: &str) -> Result<Option<String>, SessionError>;

    async fn remove(&self, key: &str) -> Result<(), SessionError>;

    async fn exists(&self, key: &str) -> Result<bool, SessionError>;

    /// Issue a new session ID while keeping the stored values.
    ///
    /// Called on privilege changes such as login.
    async fn renew(&self) -> Result<(), SessionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn session_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn SessionStore) {}
    }
}
