use async_trait::async_trait;

use super::errors::TagSuggestionError;

/// Service port for the upstream generative-text API.
///
/// Implementations issue exactly one outbound call per invocation and return
/// the raw strings the upstream produced, unnormalized.
#[async_trait]
pub trait TagGeneratorService: Send + Sync {
    async fn generate(
        &self,
        content: &str,
        count: usize,
    ) -> Result<Vec<String>, TagSuggestionError>;
}
