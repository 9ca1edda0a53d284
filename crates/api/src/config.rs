//! Process configuration, read once at startup.

use std::time::Duration;

use thiserror::Error;

use turnstile_auth::DEFAULT_TOKEN_TTL;

pub const SECRET_VAR: &str = "JWTENCRYPTIONKEY";
pub const PORT_VAR: &str = "PORT";
pub const TOKEN_TTL_VAR: &str = "TOKEN_TTL_SECONDS";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("JWTENCRYPTIONKEY must be set to a non-empty signing key")]
    MissingSecret,

    #[error("PORT is not a valid port: {0:?}")]
    InvalidPort(String),

    #[error("TOKEN_TTL_SECONDS is not a valid number of seconds: {0:?}")]
    InvalidTokenTtl(String),
}

#[derive(Clone)]
pub struct ApiConfig {
    pub jwt_secret: String,
    pub port: u16,
    pub token_ttl: Duration,
}

impl ApiConfig {
    pub const DEFAULT_PORT: u16 = 3001;

    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            port: Self::DEFAULT_PORT,
            token_ttl: DEFAULT_TOKEN_TTL,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key/value source (the environment in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = lookup(SECRET_VAR)
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingSecret)?;

        let port = match lookup(PORT_VAR) {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => Self::DEFAULT_PORT,
        };

        let token_ttl = match lookup(TOKEN_TTL_VAR) {
            Some(raw) => raw
                .trim()
                .parse()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::InvalidTokenTtl(raw))?,
            None => DEFAULT_TOKEN_TTL,
        };

        Ok(Self {
            jwt_secret,
            port,
            token_ttl,
        })
    }
}

impl core::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("jwt_secret", &"<redacted>")
            .field("port", &self.port)
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn secret_is_required() {
        assert_eq!(
            ApiConfig::from_lookup(lookup(&[])).unwrap_err(),
            ConfigError::MissingSecret
        );
        assert_eq!(
            ApiConfig::from_lookup(lookup(&[(SECRET_VAR, "")])).unwrap_err(),
            ConfigError::MissingSecret
        );
    }

    #[test]
    fn defaults_apply() {
        let cfg = ApiConfig::from_lookup(lookup(&[(SECRET_VAR, "s3cret")])).unwrap();
        assert_eq!(cfg.port, 3001);
        assert_eq!(cfg.token_ttl, Duration::from_secs(36_000));
        assert_eq!(cfg.jwt_secret, "s3cret");
    }

    #[test]
    fn overrides_are_parsed() {
        let cfg = ApiConfig::from_lookup(lookup(&[
            (SECRET_VAR, "s3cret"),
            (PORT_VAR, "8080"),
            (TOKEN_TTL_VAR, "60"),
        ]))
        .unwrap();
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.token_ttl, Duration::from_secs(60));
    }

    #[test]
    fn bad_values_are_rejected() {
        let err = ApiConfig::from_lookup(lookup(&[(SECRET_VAR, "s"), (PORT_VAR, "http")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(_)));

        let err = ApiConfig::from_lookup(lookup(&[(SECRET_VAR, "s"), (TOKEN_TTL_VAR, "-1")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTokenTtl(_)));
    }

    #[test]
    fn debug_hides_secret() {
        let printed = format!("{:?}", ApiConfig::new("s3cret"));
        assert!(!printed.contains("s3cret"));
    }
}
