use crate::shared::config::{optional, parse_or, required, ConfigError};

#[derive(Debug, Clone)]
pub struct SessionTokenConfig {
    pub secret_key: String,
    pub issuer: String,
    pub ttl_seconds: i64, // 24h unless overridden
}

impl SessionTokenConfig {
    pub const DEFAULT_TTL_SECONDS: i64 = 24 * 60 * 60;
    pub const DEFAULT_ISSUER: &'static str = "portfolio-cms";

    /// Load session token configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret_key = required("SESSION_TOKEN_SECRET")?;

        // HS256 wants at least 32 bytes of key material
        if secret_key.len() < 32 {
            return Err(ConfigError::Invalid {
                key: "SESSION_TOKEN_SECRET",
                reason: "must be at least 32 characters long".to_string(),
            });
        }

        let ttl_seconds = parse_or("SESSION_TTL_SECONDS", Self::DEFAULT_TTL_SECONDS)?;
        if ttl_seconds <= 0 {
            return Err(ConfigError::Invalid {
                key: "SESSION_TTL_SECONDS",
                reason: "must be positive".to_string(),
            });
        }

        let issuer =
            optional("SESSION_TOKEN_ISSUER").unwrap_or_else(|| Self::DEFAULT_ISSUER.to_string());

        Ok(Self {
            secret_key,
            issuer,
            ttl_seconds,
        })
    }
}
