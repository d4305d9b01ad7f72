use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashError {
    #[error("Password hashing failed")]
    HashFailed,

    #[error("Password verification failed")]
    VerifyFailed,

    /// The stored admin hash is not a PHC string this hasher understands.
    #[error("Stored password hash is malformed")]
    MalformedHash,

    #[error("Background task failed")]
    TaskFailed,
}

/// Hashing of the single admin password.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;

    /// `Ok(false)` for a wrong password; errors are reserved for unusable hashes.
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;

    /// Cheap format check run once at start-up on a configured hash.
    fn check_hash(&self, hash: &str) -> Result<(), HashError>;
}
