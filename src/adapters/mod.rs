//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `postgres` - PostgreSQL repositories
//! - `memory` - In-memory repositories for tests and database-free runs
//! - `session` - `SessionStore` over tower-sessions
//! - `http` - axum router, middleware and maud views

pub mod http;
pub mod memory;
pub mod postgres;
pub mod session;

pub use memory::{InMemorySnippetRepository, InMemoryUserRepository};
pub use postgres::{PostgresSnippetRepository, PostgresUserRepository};
pub use session::InMemorySessionStore;
