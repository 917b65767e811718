//! HTTP middleware for axum.
//!
//! This module contains middleware layers for cross-cutting concerns:
//!
//! - `auth` - Session-based authentication middleware and extractors
//! - `csrf` - Per-session CSRF token check on form posts
//! - `headers` - Security response headers

pub mod auth;
pub mod csrf;
pub mod headers;

pub use auth::{authenticate, OptionalAuth, RequireAuth};
pub use csrf::{csrf_protect, CsrfConfig, CsrfToken, CSRF_FIELD};
pub use headers::secure_headers;
