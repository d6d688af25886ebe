use std::time::Duration;

use anyhow::Context;
use gemini::client::{DEFAULT_BASE_URL, DEFAULT_MODEL};

use super::env::parse_var;

/// Configuration for Gemini API access.
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Environment variables:
    /// - GEMINI_API_KEY: API key (required)
    /// - GEMINI_MODEL: model name (default: "gemini-2.5-flash")
    /// - GEMINI_BASE_URL: API base URL (default: Google's v1beta endpoint)
    /// - SUGGESTION_TIMEOUT_SECS: upstream request timeout (default: 20)
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .context("GEMINI_API_KEY environment variable must be set")?;
        let model = parse_var("GEMINI_MODEL", DEFAULT_MODEL.to_string())?;
        let base_url = parse_var("GEMINI_BASE_URL", DEFAULT_BASE_URL.to_string())?;
        let timeout_secs: u64 = parse_var("SUGGESTION_TIMEOUT_SECS", 20)?;

        Ok(Self {
            api_key,
            model,
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
