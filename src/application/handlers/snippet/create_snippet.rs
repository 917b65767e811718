//! CreateSnippet - Command handler for publishing a snippet.

use std::sync::Arc;

use tracing::debug;

use crate::domain::forms::{Form, NO_NUL_RX};
use crate::domain::foundation::{SnippetId, StorageError};
use crate::domain::snippet::{ExpiryPeriod, Snippet};
use crate::ports::SnippetRepository;

/// Outcome of a create-snippet submission.
#[derive(Debug, Clone)]
pub enum CreateSnippetOutcome {
    /// Snippet stored under this id.
    Created(SnippetId),
    /// Submission rejected; the form carries the field errors.
    Invalid(Form),
}

/// Handler for creating snippets.
pub struct CreateSnippetHandler {
    repository: Arc<dyn SnippetRepository>,
}

impl CreateSnippetHandler {
    pub fn new(repository: Arc<dyn SnippetRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, mut form: Form) -> Result<CreateSnippetOutcome, StorageError> {
        // 1. Validate all fields
        form.required(&["title", "content", "expires"]);
        form.max_length("title", Snippet::MAX_TITLE_LEN);
        form.matches_pattern("title", &NO_NUL_RX);
        form.matches_pattern("content", &NO_NUL_RX);
        form.permitted_values("expires", &ExpiryPeriod::FORM_VALUES);

        let expires = form.get("expires").parse::<ExpiryPeriod>();
        let expires = match expires {
            Ok(expires) if form.valid() => expires,
            _ => return Ok(CreateSnippetOutcome::Invalid(form)),
        };

        // 2. Persist
        let id = self
            .repository
            .insert(form.get("title"), form.get("content"), expires)
            .await?;

        debug!(snippet_id = %id, days = expires.days(), "snippet created");
        Ok(CreateSnippetOutcome::Created(id))
    }
}
