//! Request extractors shared by the page handlers.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::request::Parts;
use chrono::{Datelike, Utc};
use tower_sessions::Session;

use crate::domain::forms::{Form, FormValues};
use crate::domain::user::User;
use crate::ports::{SessionStore, FLASH_KEY};

use super::error::WebError;
use super::middleware::CsrfToken;

/// An `application/x-www-form-urlencoded` body.
#[derive(Debug, Clone)]
pub struct PostedForm(pub FormValues);

impl PostedForm {
    /// Wraps the values in a [`Form`] ready for validation.
    pub fn into_form(self) -> Form {
        Form::new(self.0)
    }
}

#[async_trait]
impl<S> FromRequest<S> for PostedForm
where
    S: Send + Sync,
{
    type Rejection = WebError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(request, state)
            .await
            .map_err(|_| WebError::BadRequest)?;
        Ok(PostedForm(FormValues::from_urlencoded(&bytes)))
    }
}

/// Data every page template receives.
#[derive(Debug, Clone, Default)]
pub struct TemplateData {
    pub csrf_token: String,
    pub authenticated_user: Option<User>,
    pub current_year: i32,
    pub flash: Option<String>,
}

impl TemplateData {
    pub fn is_authenticated(&self) -> bool {
        self.authenticated_user.is_some()
    }
}

/// Per-request page state: the session plus what the middleware resolved.
///
/// The flash message is only consumed when [`PageContext::template_data`]
/// is called, so handlers that redirect leave it for the next page.
#[derive(Clone)]
pub struct PageContext {
    session: Arc<dyn SessionStore>,
    csrf_token: String,
    user: Option<User>,
}

impl PageContext {
    pub fn new(session: Arc<dyn SessionStore>, csrf_token: String, user: Option<User>) -> Self {
        Self {
            session,
            csrf_token,
            user,
        }
    }

    pub fn session(&self) -> &dyn SessionStore {
        self.session.as_ref()
    }

    /// Queues a message for the next rendered page.
    pub async fn flash(&self, message: impl Into<String>) -> Result<(), WebError> {
        self.session.put(FLASH_KEY, message.into()).await?;
        Ok(())
    }

    /// Builds the template data, popping the flash message.
    pub async fn template_data(&self) -> Result<TemplateData, WebError> {
        let flash = self.session.pop_once(FLASH_KEY).await?;
        Ok(TemplateData {
            csrf_token: self.csrf_token.clone(),
            authenticated_user: self.user.clone(),
            current_year: Utc::now().year(),
            flash,
        })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for PageContext
where
    S: Send + Sync,
{
    type Rejection = WebError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, msg)| WebError::Internal(msg.to_string()))?;
        let csrf_token = parts
            .extensions
            .get::<CsrfToken>()
            .map(|token| token.0.clone())
            .unwrap_or_default();
        let user = parts.extensions.get::<User>().cloned();

        Ok(PageContext::new(Arc::new(session), csrf_token, user))
    }
}
