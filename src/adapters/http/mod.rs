//! HTTP adapter - server-rendered pages over axum.
//!
//! Each domain module has its own handlers and routes; `router` composes
//! them with the middleware stack.

pub mod error;
pub mod extract;
pub mod middleware;
pub mod router;
pub mod snippet;
pub mod state;
pub mod user;
pub mod views;

// Re-export key types for convenience
pub use error::WebError;
pub use extract::{PageContext, PostedForm, TemplateData};
pub use router::{app_router, SESSION_COOKIE};
pub use state::{session_key, AppState, RouterOptions, SessionKeyError};
