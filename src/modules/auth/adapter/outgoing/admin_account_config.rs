use tracing::warn;

use crate::auth::application::domain::entities::AdminAccount;
use crate::auth::application::ports::outgoing::{HashError, PasswordHasher};
use crate::shared::config::{optional, required, ConfigError};

#[derive(Clone, PartialEq, Eq)]
pub enum AdminPassword {
    /// Argon2 PHC string from `ADMIN_PASSWORD_HASH`
    Hash(String),
    /// Plain `ADMIN_PASSWORD`, hashed once at start-up
    Plain(String),
}

#[derive(Clone)]
pub struct AdminAccountConfig {
    pub username: String,
    pub password: AdminPassword,
}

impl AdminAccountConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let username = required("ADMIN_USERNAME")?.trim().to_string();

        let password = match (optional("ADMIN_PASSWORD_HASH"), optional("ADMIN_PASSWORD")) {
            (Some(hash), _) => AdminPassword::Hash(hash.trim().to_string()),
            (None, Some(plain)) => {
                warn!("ADMIN_PASSWORD is set in plain text; prefer ADMIN_PASSWORD_HASH outside development");
                AdminPassword::Plain(plain)
            }
            (None, None) => return Err(ConfigError::Missing("ADMIN_PASSWORD_HASH")),
        };

        Ok(Self { username, password })
    }

    pub async fn into_account(
        self,
        hasher: &(dyn PasswordHasher + Send + Sync),
    ) -> Result<AdminAccount, HashError> {
        let password_hash = match self.password {
            AdminPassword::Hash(hash) => {
                hasher.check_hash(&hash)?;
                hash
            }
            AdminPassword::Plain(plain) => hasher.hash_password(&plain).await?,
        };
        Ok(AdminAccount::new(self.username, password_hash))
    }
}
