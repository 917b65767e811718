//! In-memory adapters for the repository ports.
//!
//! Same contracts as the PostgreSQL adapters, without a database.

mod snippet_repository;
mod user_repository;

pub use snippet_repository::InMemorySnippetRepository;
pub use user_repository::InMemoryUserRepository;
