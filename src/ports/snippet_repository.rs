//! Snippet repository port.
//!
//! Defines the contract for storing and reading snippets. Expiry is enforced
//! on read: an expired snippet is reported exactly like a missing one.

use crate::domain::foundation::{SnippetId, StorageError};
use crate::domain::snippet::{ExpiryPeriod, Snippet};
use async_trait::async_trait;

/// Maximum number of snippets returned by [`SnippetRepository::latest`].
pub const LATEST_LIMIT: usize = 10;

/// Repository port for snippet persistence.
///
/// Implementations must ensure:
/// - `created` and `expires` are assigned by the store at insert time
/// - Expired snippets never leave the repository
#[async_trait]
pub trait SnippetRepository: Send + Sync {
    /// Store a new snippet that expires `expires` days from now.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn insert(
        &self,
        title: &str,
        content: &str,
        expires: ExpiryPeriod,
    ) -> Result<SnippetId, StorageError>;

    /// Find an unexpired snippet by its ID.
    ///
    /// Returns `None` if the snippet is missing or expired.
    async fn get(&self, id: SnippetId) -> Result<Option<Snippet>, StorageError>;

    /// The most recently created unexpired snippets, newest first.
    ///
    /// Returns at most [`LATEST_LIMIT`] snippets.
    async fn latest(&self) -> Result<Vec<Snippet>, StorageError>;

    /// Release underlying resources. Called once at shutdown.
    async fn close(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn snippet_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn SnippetRepository) {}
    }
}
