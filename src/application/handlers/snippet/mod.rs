//! Snippet command and query handlers.

mod create_snippet;
mod get_snippet;

pub use create_snippet::{CreateSnippetHandler, CreateSnippetOutcome};
pub use get_snippet::{GetSnippetHandler, LatestSnippetsHandler};
