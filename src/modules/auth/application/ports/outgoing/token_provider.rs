use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    Expired,

    #[error("Token was issued in the future")]
    IssuedInFuture,

    #[error("Token was not issued to the admin")]
    WrongSubject,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Malformed token")]
    Malformed,

    #[error("Token encoding error: {0}")]
    Encoding(String),
}

/// Claims carried by an admin session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String, // admin username
    pub iss: String,
    pub iat: i64, // issued at, unix seconds
    pub exp: i64, // iat + ttl, informational for clients
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

pub trait TokenProvider: Send + Sync {
    fn issue_token(&self, subject: &str) -> Result<IssuedToken, TokenError>;

    /// Signature, subject and the issuance window are all checked.
    fn verify_token(&self, token: &str) -> Result<SessionClaims, TokenError>;
}
