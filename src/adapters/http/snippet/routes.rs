//! Route configuration for snippet pages.

use axum::routing::get;
use axum::Router;

use super::handlers::{create_snippet, create_snippet_form, home, show_snippet};
use crate::adapters::http::state::AppState;

/// Creates the snippet router.
///
/// Routes:
/// - `GET /` - Latest snippets
/// - `GET /snippet/create` - Create form (login required)
/// - `POST /snippet/create` - Publish snippet (login required)
/// - `GET /snippet/:id` - Show snippet
pub fn snippet_router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/snippet/create", get(create_snippet_form).post(create_snippet))
        .route("/snippet/:id", get(show_snippet))
}
