//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, storage errors)
//! - `forms` - Form values and field validation
//! - `snippet` - Snippets and their expiry periods
//! - `user` - Registered users and password hashing

pub mod foundation;
pub mod forms;
pub mod snippet;
pub mod user;
