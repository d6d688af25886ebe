pub mod app_config;
pub mod cors_config;
pub mod env;
pub mod gemini_config;
pub mod rate_limit_config;
pub mod server_config;
pub mod suggestion_config;
