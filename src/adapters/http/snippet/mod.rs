//! HTTP adapter for snippet pages.

mod handlers;
mod routes;

pub use handlers::{create_snippet, create_snippet_form, home, show_snippet};
pub use routes::snippet_router;
