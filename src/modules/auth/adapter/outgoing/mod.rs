pub mod admin_account_config;
pub mod security;
pub mod session_token;
