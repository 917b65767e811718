//! User module - registered accounts and their credentials.
//!
//! # Domain Invariants
//!
//! 1. Email addresses are unique across users
//! 2. Passwords are only ever stored as bcrypt hashes
//! 3. Users are created once via signup and never updated

mod errors;
mod password;

pub use errors::UserError;
pub use password::{PasswordHasher, DEFAULT_COST};

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId};

/// A registered user. The password hash never leaves the repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub created: Timestamp,
}
