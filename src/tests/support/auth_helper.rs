use std::sync::Arc;

use crate::auth::adapter::outgoing::session_token::{SessionTokenConfig, SessionTokenService};
use crate::auth::application::ports::outgoing::TokenProvider;

pub const TEST_ADMIN: &str = "admin";

pub fn session_token_service() -> SessionTokenService {
    SessionTokenService::new(
        SessionTokenConfig {
            secret_key: "test_secret_key_for_testing_purposes_only".to_string(),
            issuer: "portfolio-cms".to_string(),
            ttl_seconds: SessionTokenConfig::DEFAULT_TTL_SECONDS,
        },
        TEST_ADMIN,
    )
}

/// What the `AdminUser` extractor reads from app data.
pub fn token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(session_token_service())
}

pub fn admin_token() -> String {
    session_token_service()
        .issue_token(TEST_ADMIN)
        .expect("test token")
        .token
}

/// `Authorization` header carrying a fresh admin token.
pub fn bearer() -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", admin_token()))
}
