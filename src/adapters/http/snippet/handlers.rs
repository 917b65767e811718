//! HTTP handlers for snippet pages.
//!
//! These handlers connect axum routes to the snippet command and query handlers.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use maud::Markup;

use crate::application::handlers::CreateSnippetOutcome;
use crate::domain::forms::{Form, FormValues};
use crate::domain::foundation::SnippetId;
use crate::domain::snippet::ExpiryPeriod;

use crate::adapters::http::error::WebError;
use crate::adapters::http::extract::{PageContext, PostedForm};
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::state::AppState;
use crate::adapters::http::views;

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET / - Latest snippets
pub async fn home(State(state): State<AppState>, ctx: PageContext) -> Result<Markup, WebError> {
    let snippets = state.latest_snippets_handler().handle().await?;
    Ok(views::home_page(&ctx.template_data().await?, &snippets))
}

/// GET /snippet/:id - Show one snippet
pub async fn show_snippet(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ctx: PageContext,
) -> Result<Markup, WebError> {
    let id: SnippetId = id.parse().map_err(|_| WebError::NotFound)?;

    let snippet = state
        .get_snippet_handler()
        .handle(id)
        .await?
        .ok_or(WebError::NotFound)?;

    Ok(views::show_snippet_page(&ctx.template_data().await?, &snippet))
}

/// GET /snippet/create - Empty create form
pub async fn create_snippet_form(
    RequireAuth(_user): RequireAuth,
    ctx: PageContext,
) -> Result<Markup, WebError> {
    let mut values = FormValues::new();
    values.set("expires", ExpiryPeriod::default().to_string());

    Ok(views::create_snippet_page(
        &ctx.template_data().await?,
        &Form::new(values),
    ))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /snippet/create - Publish a snippet
pub async fn create_snippet(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    ctx: PageContext,
    form: PostedForm,
) -> Result<Response, WebError> {
    let outcome = state
        .create_snippet_handler()
        .handle(form.into_form())
        .await?;

    match outcome {
        CreateSnippetOutcome::Created(id) => {
            ctx.flash("Snippet successfully created!").await?;
            Ok(Redirect::to(&format!("/snippet/{}", id)).into_response())
        }
        CreateSnippetOutcome::Invalid(form) => {
            let page = views::create_snippet_page(&ctx.template_data().await?, &form);
            Ok(page.into_response())
        }
    }
}
