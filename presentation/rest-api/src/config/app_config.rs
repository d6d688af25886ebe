use super::{
    cors_config, gemini_config::GeminiConfig, rate_limit_config::RateLimitConfig,
    server_config::ServerConfig, suggestion_config::SuggestionConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub gemini: GeminiConfig,
    pub suggestion: SuggestionConfig,
    pub rate_limit: RateLimitConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            cors: cors_config::init_cors(),
            gemini: GeminiConfig::from_env()?,
            suggestion: SuggestionConfig::from_env()?,
            rate_limit: RateLimitConfig::from_env()?,
        })
    }
}
