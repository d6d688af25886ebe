#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TagSuggestionError {
    #[error("tag_suggestion.content_required")]
    InvalidInput,
    #[error("tag_suggestion.upstream_unavailable")]
    UpstreamUnavailable,
    #[error("tag_suggestion.upstream_malformed")]
    UpstreamMalformed,
}

impl TagSuggestionError {
    /// Whether a later attempt with the same input may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, TagSuggestionError::UpstreamUnavailable)
    }
}
