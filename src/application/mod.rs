//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Each handler validates a submitted form and either hands it back with
//! errors or performs the persistence step.

pub mod handlers;

pub use handlers::{
    // Snippet handlers
    CreateSnippetHandler, CreateSnippetOutcome, GetSnippetHandler, LatestSnippetsHandler,
    // User handlers
    LoginOutcome, LoginUserHandler, SignupOutcome, SignupUserHandler,
};
