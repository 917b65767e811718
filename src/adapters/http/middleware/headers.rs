//! Security response headers.

use axum::extract::Request;
use axum::http::header::{HeaderValue, X_FRAME_OPTIONS, X_XSS_PROTECTION};
use axum::middleware::Next;
use axum::response::Response;

/// Adds `X-XSS-Protection` and `X-Frame-Options` to every response.
pub async fn secure_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    headers.insert(X_XSS_PROTECTION, HeaderValue::from_static("1; mode=block"));
    headers.insert(X_FRAME_OPTIONS, HeaderValue::from_static("deny"));
    response
}
