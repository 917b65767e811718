//! Application router: routes plus the middleware stack.
//!
//! Layers, outermost first: panic recovery, request tracing, request timeout,
//! security headers, session manager, CSRF check, authentication.
//! `/ping` and `/static` sit outside the session layers.

use axum::extract::DefaultBodyLimit;
use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::get;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tower_sessions::cookie::time::Duration;
use tower_sessions::cookie::SameSite;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use super::middleware::{authenticate, csrf_protect, secure_headers, CsrfConfig};
use super::snippet::snippet_router;
use super::state::{AppState, RouterOptions};
use super::user::user_router;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "session";

/// Builds the complete application router.
pub fn app_router(state: AppState, options: RouterOptions) -> Router {
    let sessions = SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE)
        .with_signed(options.session_key.clone())
        .with_expiry(Expiry::OnInactivity(Duration::hours(
            options.session_lifetime_hours,
        )))
        .with_secure(options.secure_cookie)
        .with_same_site(SameSite::Lax)
        .with_http_only(true);

    let csrf = CsrfConfig {
        max_body_bytes: options.max_form_bytes,
    };

    let pages = Router::new()
        .merge(snippet_router())
        .merge(user_router())
        .layer(from_fn_with_state(state.clone(), authenticate))
        .layer(from_fn_with_state(csrf, csrf_protect))
        .layer(sessions)
        .layer(DefaultBodyLimit::max(options.max_form_bytes));

    let mut app = Router::new().route("/ping", get(ping)).merge(pages);

    if let Some(dir) = &options.static_dir {
        app = app.nest_service("/static", ServeDir::new(dir));
    }

    app.layer(from_fn(secure_headers))
        .layer(TimeoutLayer::new(options.request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new())
        .with_state(state)
}

/// GET /ping - Liveness check
pub async fn ping() -> &'static str {
    "OK"
}
