//! Error type returned by page handlers and middleware.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::domain::foundation::StorageError;
use crate::ports::SessionError;

/// Errors rendered as plain-text status pages.
///
/// Internal details are logged, never sent to the client.
#[derive(Debug, Error)]
pub enum WebError {
    #[error("Bad Request")]
    BadRequest,

    #[error("Not logged in")]
    Unauthorized,

    #[error("Not Found")]
    NotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StorageError> for WebError {
    fn from(err: StorageError) -> Self {
        WebError::Internal(err.to_string())
    }
}

impl From<SessionError> for WebError {
    fn from(err: SessionError) -> Self {
        WebError::Internal(err.to_string())
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            WebError::BadRequest => (StatusCode::BAD_REQUEST, "Bad Request").into_response(),
            WebError::Unauthorized => (StatusCode::UNAUTHORIZED, "Not logged in").into_response(),
            WebError::NotFound => (StatusCode::NOT_FOUND, "Not Found").into_response(),
            WebError::Internal(msg) => {
                tracing::error!(error = %msg, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), 1024).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn internal_error_hides_details() {
        let response = WebError::from(StorageError::query("password authentication failed")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response).await, "Internal Server Error");
    }

    #[tokio::test]
    async fn client_errors_map_to_status() {
        assert_eq!(WebError::BadRequest.into_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(WebError::NotFound.into_response().status(), StatusCode::NOT_FOUND);

        let response = WebError::Unauthorized.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_text(response).await, "Not logged in");
    }
}
