//! Error types shared by the persistence ports.

use thiserror::Error;

/// A genuine storage failure.
///
/// "Not found" is never a `StorageError`; repositories return `Ok(None)`.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Query failed: {0}")]
    Query(String),

    #[error("Could not decode row: {0}")]
    Decode(String),

    #[error("Password hashing failed: {0}")]
    Hashing(String),
}

impl StorageError {
    /// Creates a query error from any displayable cause.
    pub fn query(cause: impl std::fmt::Display) -> Self {
        StorageError::Query(cause.to_string())
    }

    /// Creates a decode error from any displayable cause.
    pub fn decode(cause: impl std::fmt::Display) -> Self {
        StorageError::Decode(cause.to_string())
    }

    /// Creates a hashing error from any displayable cause.
    pub fn hashing(cause: impl std::fmt::Display) -> Self {
        StorageError::Hashing(cause.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_error_displays_cause() {
        let err = StorageError::query("connection refused");
        assert_eq!(err.to_string(), "Query failed: connection refused");
    }

    #[test]
    fn hashing_error_displays_cause() {
        let err = StorageError::hashing("cost out of range");
        assert_eq!(err.to_string(), "Password hashing failed: cost out of range");
    }
}
