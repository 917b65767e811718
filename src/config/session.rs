//! Session configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Shortest accepted signing secret, in bytes
pub const MIN_SECRET_LEN: usize = 32;

/// Longest accepted session lifetime: one year
pub const MAX_LIFETIME_HOURS: u64 = 24 * 365;

/// Session cookie configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Secret used to sign the session cookie
    pub secret: SecretString,

    /// Session lifetime (since last activity) in hours
    #[serde(default = "default_lifetime_hours")]
    pub lifetime_hours: u64,

    /// Only send the session cookie over HTTPS
    #[serde(default = "default_secure_cookie")]
    pub secure_cookie: bool,
}

impl SessionConfig {
    /// Build a config around a secret with default lifetime and cookie flags
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            secret: SecretString::new(secret.into()),
            lifetime_hours: default_lifetime_hours(),
            secure_cookie: default_secure_cookie(),
        }
    }

    /// Validate session configuration
    ///
    /// Production deployments must mark the cookie `Secure`.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let secret = self.secret.expose_secret();
        if secret.is_empty() {
            return Err(ValidationError::MissingRequired("SESSION_SECRET"));
        }
        if secret.len() < MIN_SECRET_LEN {
            return Err(ValidationError::SessionSecretTooShort(MIN_SECRET_LEN));
        }
        if self.lifetime_hours == 0 || self.lifetime_hours > MAX_LIFETIME_HOURS {
            return Err(ValidationError::InvalidSessionLifetime);
        }
        if *environment == Environment::Production && !self.secure_cookie {
            return Err(ValidationError::InsecureCookieInProduction);
        }
        Ok(())
    }
}

fn default_lifetime_hours() -> u64 {
    12
}

fn default_secure_cookie() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "s6Ndh+pPbnzHbS*+9Pk8qGWhTzbpa@ge";

    #[test]
    fn test_session_config_defaults() {
        let config = SessionConfig::with_secret(SECRET);
        assert_eq!(config.lifetime_hours, 12);
        assert!(config.secure_cookie);
        assert!(config.validate(&Environment::Development).is_ok());
    }

    #[test]
    fn test_validation_missing_secret() {
        let config = SessionConfig::with_secret("");
        assert!(matches!(
            config.validate(&Environment::Development),
            Err(ValidationError::MissingRequired(_))
        ));
    }

    #[test]
    fn test_validation_short_secret() {
        let config = SessionConfig::with_secret("too-short");
        assert!(matches!(
            config.validate(&Environment::Development),
            Err(ValidationError::SessionSecretTooShort(32))
        ));
    }

    #[test]
    fn test_validation_zero_lifetime() {
        let config = SessionConfig {
            lifetime_hours: 0,
            ..SessionConfig::with_secret(SECRET)
        };
        assert!(config.validate(&Environment::Development).is_err());
    }

    #[test]
    fn test_validation_lifetime_upper_bound() {
        let year = SessionConfig {
            lifetime_hours: MAX_LIFETIME_HOURS,
            ..SessionConfig::with_secret(SECRET)
        };
        assert!(year.validate(&Environment::Development).is_ok());

        let forever = SessionConfig {
            lifetime_hours: u64::MAX,
            ..SessionConfig::with_secret(SECRET)
        };
        assert!(matches!(
            forever.validate(&Environment::Development),
            Err(ValidationError::InvalidSessionLifetime)
        ));
    }

    #[test]
    fn test_validation_production_requires_secure_cookie() {
        let config = SessionConfig {
            secure_cookie: false,
            ..SessionConfig::with_secret(SECRET)
        };
        // Allowed in development
        assert!(config.validate(&Environment::Development).is_ok());
        // Rejected in production
        assert!(config.validate(&Environment::Production).is_err());
    }
}
