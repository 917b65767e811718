//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod snippet;
pub mod user;

pub use snippet::{
    CreateSnippetHandler, CreateSnippetOutcome, GetSnippetHandler, LatestSnippetsHandler,
};
pub use user::{LoginOutcome, LoginUserHandler, SignupOutcome, SignupUserHandler};
