mod session_token_config;
mod session_token_service;

pub use session_token_config::SessionTokenConfig;
pub use session_token_service::SessionTokenService;
