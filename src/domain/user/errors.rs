//! User error types.

use thiserror::Error;

use crate::domain::foundation::StorageError;

/// Outcomes of user operations that are not plain success.
#[derive(Debug, Error)]
pub enum UserError {
    #[error("Email address is already registered")]
    DuplicateEmail,

    /// Unknown email and wrong password are deliberately indistinguishable.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error(transparent)]
    Storage(#[from] StorageError),
}
