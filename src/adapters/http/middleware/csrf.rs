//! CSRF protection for form posts.
//!
//! Each session carries a random token under `csrf_token`. Every
//! state-changing request must echo it back in a `csrf_token` form field.
//! The body is buffered to check the field, then handed on unchanged.

use axum::body::{to_bytes, Body};
use axum::extract::{Request, State};
use axum::http::Method;
use axum::middleware::Next;
use axum::response::Response;
use subtle::ConstantTimeEq;
use tower_sessions::Session;
use tracing::warn;
use uuid::Uuid;

use crate::adapters::http::error::WebError;
use crate::domain::forms::FormValues;
use crate::ports::{SessionStore, CSRF_TOKEN_KEY};

/// Form field carrying the token.
pub const CSRF_FIELD: &str = "csrf_token";

/// The current session's token, available to handlers via extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrfToken(pub String);

/// Settings for [`csrf_protect`].
#[derive(Debug, Clone, Copy)]
pub struct CsrfConfig {
    /// Largest body buffered for the token check.
    pub max_body_bytes: usize,
}

pub async fn csrf_protect(
    State(config): State<CsrfConfig>,
    session: Session,
    request: Request,
    next: Next,
) -> Result<Response, WebError> {
    let store: &dyn SessionStore = &session;
    let token = session_token(store).await?;

    let mut request = if is_state_changing(request.method()) {
        let (parts, body) = request.into_parts();
        let bytes = to_bytes(body, config.max_body_bytes)
            .await
            .map_err(|_| WebError::BadRequest)?;

        let submitted = FormValues::from_urlencoded(&bytes);
        if !tokens_match(submitted.get(CSRF_FIELD), &token) {
            warn!(method = %parts.method, path = %parts.uri.path(), "rejected request with invalid CSRF token");
            return Err(WebError::BadRequest);
        }
        Request::from_parts(parts, Body::from(bytes))
    } else {
        request
    };

    request.extensions_mut().insert(CsrfToken(token));
    Ok(next.run(request).await)
}

/// Returns the session's token, creating one on first use.
async fn session_token(store: &dyn SessionStore) -> Result<String, WebError> {
    if let Some(token) = store.get(CSRF_TOKEN_KEY).await? {
        return Ok(token);
    }
    let token = new_token();
    store.put(CSRF_TOKEN_KEY, token.clone()).await?;
    Ok(token)
}

fn new_token() -> String {
    format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple())
}

fn is_state_changing(method: &Method) -> bool {
    matches!(
        *method,
        Method::POST | Method::PUT | Method::PATCH | Method::DELETE
    )
}

fn tokens_match(submitted: &str, expected: &str) -> bool {
    !expected.is_empty() && bool::from(submitted.as_bytes().ct_eq(expected.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::session::InMemorySessionStore;

    #[test]
    fn token_is_long_and_random() {
        let a = new_token();
        let b = new_token();
        assert_eq!(a.len(), 64);
        assert_ne!(a, b);
    }

    #[test]
    fn only_unsafe_methods_are_checked() {
        assert!(is_state_changing(&Method::POST));
        assert!(is_state_changing(&Method::DELETE));
        assert!(!is_state_changing(&Method::GET));
        assert!(!is_state_changing(&Method::HEAD));
    }

    #[test]
    fn token_comparison() {
        assert!(tokens_match("abc123", "abc123"));
        assert!(!tokens_match("abc124", "abc123"));
        assert!(!tokens_match("", "abc123"));
        assert!(!tokens_match("abc", "abc123"));
        assert!(!tokens_match("", ""));
    }

    #[tokio::test]
    async fn session_token_is_stable() {
        let store = InMemorySessionStore::new();
        let first = session_token(&store).await.unwrap();
        let second = session_token(&store).await.unwrap();
        assert_eq!(first, second);
    }
}
