//! SessionStore backed by `tower_sessions::Session`.

use async_trait::async_trait;
use tower_sessions::Session;

use crate::ports::{SessionError, SessionStore};

#[async_trait]
impl SessionStore for Session {
    async fn put(&self, key: &str, value: String) -> Result<(), SessionError> {
        self.insert(key, value).await.map_err(SessionError::store)
    }

    async fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        Session::get::<String>(self, key)
            .await
            .map_err(SessionError::store)
    }

    async fn pop_once(&self, key: &str) -> Result<Option<String>, SessionError> {
        Session::remove::<String>(self, key)
            .await
            .map_err(SessionError::store)
    }

    async fn remove(&self, key: &str) -> Result<(), SessionError> {
        self.remove_value(key)
            .await
            .map(|_| ())
            .map_err(SessionError::store)
    }

    async fn exists(&self, key: &str) -> Result<bool, SessionError> {
        let value = Session::get::<serde_json::Value>(self, key)
            .await
            .map_err(SessionError::store)?;
        Ok(value.is_some())
    }

    async fn renew(&self) -> Result<(), SessionError> {
        self.cycle_id().await.map_err(SessionError::store)
    }
}
