//! JWT configuration.
//!
//! `JWT_SECRET` has no fallback: a missing or blank secret is a startup error.

use crate::{ConfigError, env_lookup, parse_or};

#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    /// Lifetime in seconds of tokens issued by this service.
    pub access_token_expiry: i64,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("access_token_expiry", &self.access_token_expiry)
            .finish()
    }
}

impl JwtConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup("JWT_SECRET")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;

        Ok(Self {
            secret,
            access_token_expiry: parse_or(&lookup, "JWT_ACCESS_EXPIRY", 3600)?, // 1 hour
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_secret_fails() {
        let err = JwtConfig::from_lookup(|_| None).unwrap_err();
        assert_eq!(err, ConfigError::Missing("JWT_SECRET"));
    }

    #[test]
    fn test_blank_secret_fails() {
        let err = JwtConfig::from_lookup(|key| match key {
            "JWT_SECRET" => Some("   ".into()),
            _ => None,
        })
        .unwrap_err();
        assert_eq!(err, ConfigError::Missing("JWT_SECRET"));
    }

    #[test]
    fn test_loads_secret_and_default_expiry() {
        let config = JwtConfig::from_lookup(|key| match key {
            "JWT_SECRET" => Some("s3cret".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.secret, "s3cret");
        assert_eq!(config.access_token_expiry, 3600);
    }

    #[test]
    fn test_invalid_expiry() {
        let err = JwtConfig::from_lookup(|key| match key {
            "JWT_SECRET" => Some("s3cret".into()),
            "JWT_ACCESS_EXPIRY" => Some("soon".into()),
            _ => None,
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "JWT_ACCESS_EXPIRY", .. }));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = JwtConfig {
            secret: "do-not-print".into(),
            access_token_expiry: 60,
        };
        assert!(!format!("{config:?}").contains("do-not-print"));
    }
}
