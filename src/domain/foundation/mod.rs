//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps and the storage error type
//! that form the vocabulary of the snippetbox domain.

mod errors;
mod ids;
mod timestamp;

pub use errors::StorageError;
pub use ids::{SnippetId, UserId};
pub use timestamp::Timestamp;
