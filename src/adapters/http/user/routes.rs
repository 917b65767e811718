//! Route configuration for account pages.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{login, login_form, logout, signup, signup_form};
use crate::adapters::http::state::AppState;

/// Creates the user router.
///
/// Routes:
/// - `GET|POST /user/signup`
/// - `GET|POST /user/login`
/// - `POST /user/logout` (login required)
pub fn user_router() -> Router<AppState> {
    Router::new()
        .route("/user/signup", get(signup_form).post(signup))
        .route("/user/login", get(login_form).post(login))
        .route("/user/logout", post(logout))
}
