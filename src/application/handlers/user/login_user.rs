//! LoginUser - Command handler for checking credentials.

use std::sync::Arc;

use tracing::info;

use crate::domain::forms::{Form, EMAIL_RX, GENERIC_FIELD, NO_NUL_RX};
use crate::domain::foundation::{StorageError, UserId};
use crate::domain::user::UserError;
use crate::ports::UserRepository;

use super::MIN_PASSWORD_LEN;

/// Outcome of a login submission.
#[derive(Debug, Clone)]
pub enum LoginOutcome {
    Authenticated { user_id: UserId, name: String },
    Invalid(Form),
}

/// Handler for user login.
///
/// Session bookkeeping (storing the id, renewing the session) is left to
/// the caller.
pub struct LoginUserHandler {
    repository: Arc<dyn UserRepository>,
}

impl LoginUserHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, mut form: Form) -> Result<LoginOutcome, StorageError> {
        form.required(&["email", "password"]);
        form.matches_pattern("email", &EMAIL_RX);
        form.min_length("password", MIN_PASSWORD_LEN);
        form.matches_pattern("password", &NO_NUL_RX);

        if !form.valid() {
            return Ok(LoginOutcome::Invalid(form));
        }

        let result = self
            .repository
            .authenticate(form.get("email"), form.get("password"))
            .await;

        match result {
            Ok((user_id, name)) => {
                info!(user_id = %user_id, "user logged in");
                Ok(LoginOutcome::Authenticated { user_id, name })
            }
            Err(UserError::InvalidCredentials) => {
                form.add_error(GENERIC_FIELD, "Invalid email or password");
                Ok(LoginOutcome::Invalid(form))
            }
            Err(UserError::DuplicateEmail) => {
                Err(StorageError::query("authenticate reported a duplicate email"))
            }
            Err(UserError::Storage(err)) => Err(err),
        }
    }
}
