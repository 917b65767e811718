//! SignupUser - Command handler for registering an account.

use std::sync::Arc;

use tracing::info;

use crate::domain::forms::{Form, EMAIL_RX, NO_NUL_RX};
use crate::domain::foundation::{StorageError, UserId};
use crate::domain::user::UserError;
use crate::ports::UserRepository;

/// Shortest accepted password, in characters.
pub const MIN_PASSWORD_LEN: usize = 10;

/// Outcome of a signup submission.
#[derive(Debug, Clone)]
pub enum SignupOutcome {
    Registered(UserId),
    /// Rejected by validation or because the email is taken.
    Invalid(Form),
}

/// Handler for user signup.
pub struct SignupUserHandler {
    repository: Arc<dyn UserRepository>,
}

impl SignupUserHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, mut form: Form) -> Result<SignupOutcome, StorageError> {
        // 1. Validate all fields
        form.required(&["name", "email", "password"]);
        form.matches_pattern("email", &EMAIL_RX);
        form.min_length("password", MIN_PASSWORD_LEN);
        form.matches_pattern("name", &NO_NUL_RX);
        form.matches_pattern("password", &NO_NUL_RX);

        if !form.valid() {
            return Ok(SignupOutcome::Invalid(form));
        }

        // 2. Persist, turning a taken address into a field error
        let result = self
            .repository
            .insert(form.get("name"), form.get("email"), form.get("password"))
            .await;

        match result {
            Ok(user_id) => {
                info!(user_id = %user_id, "user signed up");
                Ok(SignupOutcome::Registered(user_id))
            }
            Err(UserError::DuplicateEmail) => {
                form.add_error("email", "Address is already in use");
                Ok(SignupOutcome::Invalid(form))
            }
            Err(UserError::InvalidCredentials) => {
                Err(StorageError::query("insert reported invalid credentials"))
            }
            Err(UserError::Storage(err)) => Err(err),
        }
    }
}
