use std::fmt;

/// The single account allowed to edit the portfolio.
#[derive(Clone, PartialEq, Eq)]
pub struct AdminAccount {
    pub username: String,
    /// PHC string (argon2id)
    pub password_hash: String,
}

impl AdminAccount {
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
        }
    }
}

impl fmt::Debug for AdminAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminAccount")
            .field("username", &self.username)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}
