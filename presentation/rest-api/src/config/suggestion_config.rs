use std::time::Duration;

use business::domain::tag_suggestion::model::RetryPolicy;

use super::env::parse_var;

/// Retry behavior around the upstream call.
///
/// Environment variables:
/// - SUGGESTION_MAX_RETRIES: retries after a transient upstream failure (default: 0)
/// - SUGGESTION_RETRY_BACKOFF_MS: delay between attempts (default: 500)
pub struct SuggestionConfig {
    pub retry: RetryPolicy,
}

impl SuggestionConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let max_retries = parse_var("SUGGESTION_MAX_RETRIES", 0)?;
        let backoff_ms = parse_var("SUGGESTION_RETRY_BACKOFF_MS", 500)?;

        Ok(Self {
            retry: RetryPolicy::new(max_retries, Duration::from_millis(backoff_ms)),
        })
    }
}
