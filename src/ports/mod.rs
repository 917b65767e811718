//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `SnippetRepository` - Snippet storage with expiry filtering
//! - `UserRepository` - User accounts, password hashing and authentication
//!
//! ## Session Port
//!
//! - `SessionStore` - Per-visitor key/value session state

mod session_store;
mod snippet_repository;
mod user_repository;

pub use session_store::{
    SessionError, SessionStore, AUTHENTICATED_USER_ID_KEY, CSRF_TOKEN_KEY, FLASH_KEY,
};
pub use snippet_repository::{SnippetRepository, LATEST_LIMIT};
pub use user_repository::UserRepository;
