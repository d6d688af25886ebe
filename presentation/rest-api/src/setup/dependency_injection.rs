use std::sync::Arc;

use anyhow::Context;
use logger::TracingLogger;

use gemini::client::GeminiClient;
use gemini::tag_generator::TagGeneratorGemini;

use business::application::tag_suggestion::suggest::SuggestTagsUseCaseImpl;
use business::domain::tag_suggestion::model::RetryPolicy;
use business::domain::tag_suggestion::services::TagGeneratorService;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub suggestion_api: crate::api::suggestion::routes::SuggestionApi,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        // One client per process so connections are pooled across requests
        let gemini_client = GeminiClient::new(config.gemini.api_key.clone(), config.gemini.timeout)
            .context("failed to build the Gemini HTTP client")?
            .with_base_url(config.gemini.base_url.clone())
            .with_model(config.gemini.model.clone());
        let tag_generator = Arc::new(TagGeneratorGemini::new(gemini_client));

        Ok(Self::with_generator(
            tag_generator,
            config.suggestion.retry.clone(),
        ))
    }

    /// Wires the APIs around any tag generator.
    pub fn with_generator(generator: Arc<dyn TagGeneratorService>, retry: RetryPolicy) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        let suggest_tags_use_case = Arc::new(SuggestTagsUseCaseImpl {
            generator,
            logger,
            retry,
        });

        let suggestion_api =
            crate::api::suggestion::routes::SuggestionApi::new(suggest_tags_use_case);

        Self {
            health_api,
            suggestion_api,
        }
    }
}
