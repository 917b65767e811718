//! Authentication middleware and extractors for axum.
//!
//! This module provides:
//! - `authenticate` - Layer that resolves the session's user and injects it into extensions
//! - `RequireAuth` - Extractor that requires a logged-in user
//! - `OptionalAuth` - Extractor for pages that render either way
//!
//! ```text
//! Request → session layer → authenticate → injects User into extensions
//!                                              ↓
//!                                   Handler → RequireAuth reads from extensions
//! ```

use async_trait::async_trait;
use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use tower_sessions::Session;
use tracing::debug;

use crate::adapters::http::error::WebError;
use crate::adapters::http::state::AppState;
use crate::domain::foundation::UserId;
use crate::domain::user::User;
use crate::ports::{SessionStore, AUTHENTICATED_USER_ID_KEY};

/// Authentication middleware backed by the session.
///
/// This middleware:
/// 1. Reads the user id stored under `authenticatedUserID`
/// 2. Loads the user through the `UserRepository` port
/// 3. On success, injects `User` into request extensions
/// 4. If the user no longer exists, drops the key and continues anonymously
/// 5. On storage failure, returns 500
pub async fn authenticate(
    State(state): State<AppState>,
    session: Session,
    mut request: Request,
    next: Next,
) -> Result<Response, WebError> {
    let store: &dyn SessionStore = &session;

    if let Some(raw) = store.get(AUTHENTICATED_USER_ID_KEY).await? {
        let user = match raw.parse::<UserId>() {
            Ok(id) => state.user_repository.get(id).await?,
            Err(_) => None,
        };

        match user {
            Some(user) => {
                request.extensions_mut().insert(user);
            }
            None => {
                debug!("session references a missing user, clearing it");
                store.remove(AUTHENTICATED_USER_ID_KEY).await?;
            }
        }
    }

    Ok(next.run(request).await)
}

/// Extractor that requires authentication.
///
/// Returns 401 "Not logged in" when `authenticate` found no user.
///
/// # Example
///
/// ```ignore
/// async fn my_handler(RequireAuth(user): RequireAuth) -> impl IntoResponse {
///     format!("Hello, {}!", user.name)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireAuth(pub User);

#[async_trait]
impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = WebError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<User>()
            .cloned()
            .map(RequireAuth)
            .ok_or(WebError::Unauthorized)
    }
}

/// Extractor for optional authentication.
#[derive(Debug, Clone)]
pub struct OptionalAuth(pub Option<User>);

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuth
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(OptionalAuth(parts.extensions.get::<User>().cloned()))
    }
}
