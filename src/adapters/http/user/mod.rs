//! HTTP adapter for account pages.

mod handlers;
mod routes;

pub use handlers::{login, login_form, logout, signup, signup_form};
pub use routes::user_router;
