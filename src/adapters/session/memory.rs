//! In-memory SessionStore for handler tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::ports::{SessionError, SessionStore};

/// Session state held in a map; `renew` only counts calls.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    values: Mutex<HashMap<String, String>>,
    renewals: Mutex<usize>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times the session id was renewed.
    pub fn renewals(&self) -> usize {
        self.renewals.lock().map(|n| *n).unwrap_or(0)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, SessionError> {
        self.values
            .lock()
            .map_err(|_| SessionError::store("session map poisoned"))
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn put(&self, key: &str, value: String) -> Result<(), SessionError> {
        self.lock()?.insert(key.to_string(), value);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.lock()?.get(key).cloned())
    }

    async fn pop_once(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.lock()?.remove(key))
    }

    async fn remove(&self, key: &str) -> Result<(), SessionError> {
        self.lock()?.remove(key);
        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool, SessionError> {
        Ok(self.lock()?.contains_key(key))
    }

    async fn renew(&self) -> Result<(), SessionError> {
        let mut renewals = self
            .renewals
            .lock()
            .map_err(|_| SessionError::store("renewal counter poisoned"))?;
        *renewals += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn flash_is_shown_once() {
        let store = InMemorySessionStore::new();
        store.put("flash", "Snippet successfully created!".to_string()).await.unwrap();

        assert_eq!(
            store.pop_once("flash").await.unwrap().as_deref(),
            Some("Snippet successfully created!")
        );
        assert!(store.pop_once("flash").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn renew_keeps_values() {
        let store = InMemorySessionStore::new();
        store.put("authenticatedUserID", "7".to_string()).await.unwrap();
        store.renew().await.unwrap();

        assert_eq!(store.renewals(), 1);
        assert!(store.exists("authenticatedUserID").await.unwrap());
    }
}
