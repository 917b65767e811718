//! Shared application state and router options.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use secrecy::ExposeSecret;
use sha2::{Digest, Sha512};
use thiserror::Error;
use tower_sessions::cookie::Key;

use crate::application::handlers::{
    CreateSnippetHandler, GetSnippetHandler, LatestSnippetsHandler, LoginUserHandler,
    SignupUserHandler,
};
use crate::config::{AppConfig, MAX_LIFETIME_HOURS};
use crate::ports::{SnippetRepository, UserRepository};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct AppState {
    pub snippet_repository: Arc<dyn SnippetRepository>,
    pub user_repository: Arc<dyn UserRepository>,
}

impl AppState {
    pub fn new(
        snippet_repository: Arc<dyn SnippetRepository>,
        user_repository: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            snippet_repository,
            user_repository,
        }
    }

    pub fn create_snippet_handler(&self) -> CreateSnippetHandler {
        CreateSnippetHandler::new(self.snippet_repository.clone())
    }

    pub fn get_snippet_handler(&self) -> GetSnippetHandler {
        GetSnippetHandler::new(self.snippet_repository.clone())
    }

    pub fn latest_snippets_handler(&self) -> LatestSnippetsHandler {
        LatestSnippetsHandler::new(self.snippet_repository.clone())
    }

    pub fn signup_user_handler(&self) -> SignupUserHandler {
        SignupUserHandler::new(self.user_repository.clone())
    }

    pub fn login_user_handler(&self) -> LoginUserHandler {
        LoginUserHandler::new(self.user_repository.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Router Options
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Error)]
#[error("Could not derive session key: {0}")]
pub struct SessionKeyError(String);

/// Settings for the middleware stack, derived from [`AppConfig`].
#[derive(Clone)]
pub struct RouterOptions {
    pub session_key: Key,
    pub session_lifetime_hours: i64,
    pub secure_cookie: bool,
    pub request_timeout: Duration,
    pub max_form_bytes: usize,
    /// Served under `/static` when set.
    pub static_dir: Option<PathBuf>,
}

impl RouterOptions {
    pub fn from_config(config: &AppConfig) -> Result<Self, SessionKeyError> {
        let static_dir = Some(config.server.static_dir.clone()).filter(|dir| dir.is_dir());

        Ok(Self {
            session_key: session_key(config.session.secret.expose_secret())?,
            // Bounded by MAX_LIFETIME_HOURS, so the cast is lossless.
            session_lifetime_hours: config.session.lifetime_hours.min(MAX_LIFETIME_HOURS) as i64,
            secure_cookie: config.session.secure_cookie,
            request_timeout: config.server.request_timeout(),
            max_form_bytes: config.server.max_form_bytes,
            static_dir,
        })
    }
}

/// Derives the 64-byte cookie signing key from the configured secret.
pub fn session_key(secret: &str) -> Result<Key, SessionKeyError> {
    let digest = Sha512::digest(secret.as_bytes());
    Key::try_from(digest.as_slice()).map_err(|e| SessionKeyError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DatabaseConfig, ServerConfig, SessionConfig};

    fn config_with_lifetime(hours: u64) -> AppConfig {
        AppConfig {
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            session: SessionConfig {
                lifetime_hours: hours,
                ..SessionConfig::with_secret("s6Ndh+pPbnzHbS*+9Pk8qGWhTzbpa@ge")
            },
        }
    }

    #[test]
    fn options_carry_session_lifetime() {
        let options = RouterOptions::from_config(&config_with_lifetime(12)).unwrap();
        assert_eq!(options.session_lifetime_hours, 12);
    }

    #[test]
    fn options_cap_oversized_session_lifetime() {
        let options = RouterOptions::from_config(&config_with_lifetime(u64::MAX)).unwrap();
        assert_eq!(options.session_lifetime_hours, 24 * 365);
    }

    #[test]
    fn session_key_is_deterministic() {
        let a = session_key("s6Ndh+pPbnzHbS*+9Pk8qGWhTzbpa@ge").unwrap();
        let b = session_key("s6Ndh+pPbnzHbS*+9Pk8qGWhTzbpa@ge").unwrap();
        let c = session_key("another-secret-of-sufficient-size").unwrap();

        assert_eq!(a.master(), b.master());
        assert_ne!(a.master(), c.master());
    }
}
