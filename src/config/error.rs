//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid host address: {0}")]
    InvalidHost(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Form body limit must be positive")]
    InvalidFormLimit,

    #[error("Invalid database URL format")]
    InvalidDatabaseUrl,

    #[error("Pool needs 1..=max_connections connections, with min_connections <= max_connections")]
    InvalidPoolSize,

    #[error("Pool acquire timeout must be positive")]
    InvalidAcquireTimeout,

    #[error("Pool size exceeds maximum allowed (100)")]
    PoolSizeTooLarge,

    #[error("Session secret must be at least {0} bytes")]
    SessionSecretTooShort(usize),

    #[error("Session lifetime must be between 1 hour and 1 year")]
    InvalidSessionLifetime,

    #[error("Session cookie must be secure in production")]
    InsecureCookieInProduction,
}
