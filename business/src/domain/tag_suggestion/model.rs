use std::time::Duration;

use super::errors::TagSuggestionError;

/// Number of tags requested from the upstream and the upper bound returned to callers.
pub const TAG_COUNT: usize = 5;

/// Post text submitted for tag suggestions.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionRequest {
    content: String,
}

impl SuggestionRequest {
    /// Validates and trims the content. Blank content is rejected.
    pub fn new(content: &str) -> Result<Self, TagSuggestionError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(TagSuggestionError::InvalidInput);
        }
        Ok(Self {
            content: trimmed.to_string(),
        })
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// A suggested tag, stored without any `#` marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hashtag(String);

impl Hashtag {
    /// Builds a tag from raw upstream text. Returns `None` when nothing remains
    /// after stripping `#` characters and surrounding whitespace.
    pub fn parse(raw: &str) -> Option<Self> {
        let cleaned: String = raw.chars().filter(|c| *c != '#').collect();
        let cleaned = cleaned.trim();
        if cleaned.is_empty() {
            None
        } else {
            Some(Self(cleaned.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Hashtag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Normalizes upstream output: keeps upstream order, drops entries that are
/// empty once cleaned, and truncates to `limit`. Never pads.
pub fn normalize_tags(raw: Vec<String>, limit: usize) -> Vec<Hashtag> {
    raw.iter()
        .filter_map(|tag| Hashtag::parse(tag))
        .take(limit)
        .collect()
}

/// How transient upstream failures are retried.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub backoff: Duration,
}

impl RetryPolicy {
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            backoff: Duration::ZERO,
        }
    }

    pub fn new(max_retries: u32, backoff: Duration) -> Self {
        Self {
            max_retries,
            backoff,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::none()
    }
}
