//! User command handlers - signup and login.

mod login_user;
mod signup_user;

#[cfg(test)]
mod test_support;

pub use login_user::{LoginOutcome, LoginUserHandler};
pub use signup_user::{SignupOutcome, SignupUserHandler, MIN_PASSWORD_LEN};
