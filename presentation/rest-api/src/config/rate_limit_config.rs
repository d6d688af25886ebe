use super::env::parse_var;

/// Per-client request budget.
///
/// Environment variables:
/// - RATE_LIMIT_PER_MINUTE: requests per client IP per minute (default: 0, disabled)
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub per_minute: u32,
}

impl RateLimitConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            per_minute: parse_var("RATE_LIMIT_PER_MINUTE", 0)?,
        })
    }

    pub fn enabled(&self) -> bool {
        self.per_minute > 0
    }
}
