use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::tag_suggestion::errors::TagSuggestionError;
use crate::domain::tag_suggestion::model::{
    Hashtag, RetryPolicy, SuggestionRequest, TAG_COUNT, normalize_tags,
};
use crate::domain::tag_suggestion::services::TagGeneratorService;
use crate::domain::tag_suggestion::use_cases::suggest::{SuggestTagsParams, SuggestTagsUseCase};

pub struct SuggestTagsUseCaseImpl {
    pub generator: Arc<dyn TagGeneratorService>,
    pub logger: Arc<dyn Logger>,
    pub retry: RetryPolicy,
}

impl SuggestTagsUseCaseImpl {
    async fn generate_with_retry(
        &self,
        request: &SuggestionRequest,
    ) -> Result<Vec<String>, TagSuggestionError> {
        let mut attempt = 0;
        loop {
            match self.generator.generate(request.content(), TAG_COUNT).await {
                Err(err) if err.is_transient() && attempt < self.retry.max_retries => {
                    attempt += 1;
                    self.logger.warn(&format!(
                        "Upstream unavailable, retrying ({}/{})",
                        attempt, self.retry.max_retries
                    ));
                    tokio::time::sleep(self.retry.backoff).await;
                }
                result => return result,
            }
        }
    }
}

#[async_trait]
impl SuggestTagsUseCase for SuggestTagsUseCaseImpl {
    async fn execute(
        &self,
        params: SuggestTagsParams,
    ) -> Result<Vec<Hashtag>, TagSuggestionError> {
        let request = SuggestionRequest::new(&params.content).inspect_err(|_| {
            self.logger
                .debug("Rejected tag suggestion request with blank content")
        })?;

        self.logger.info(&format!(
            "Suggesting tags for content of {} chars",
            request.content().chars().count()
        ));

        let raw = match self.generate_with_retry(&request).await {
            Ok(raw) => raw,
            Err(TagSuggestionError::UpstreamMalformed) => {
                self.logger
                    .error("Upstream returned output that is not an array of strings");
                return Err(TagSuggestionError::UpstreamMalformed);
            }
            Err(err) => {
                self.logger
                    .warn(&format!("Tag suggestion failed upstream: {}", err));
                return Err(err);
            }
        };

        let received = raw.len();
        let tags = normalize_tags(raw, TAG_COUNT);

        if tags.is_empty() {
            self.logger.error(&format!(
                "Upstream returned {} entries but no usable tag",
                received
            ));
            return Err(TagSuggestionError::UpstreamMalformed);
        }

        if received != TAG_COUNT {
            self.logger.debug(&format!(
                "Upstream returned {} tags, expected {}",
                received, TAG_COUNT
            ));
        }

        self.logger.info(&format!("Suggested {} tags", tags.len()));

        Ok(tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use mockall::predicate::eq;
    use std::time::Duration;

    mock! {
        pub TagGenerator {}

        #[async_trait]
        impl TagGeneratorService for TagGenerator {
            async fn generate(
                &self,
                content: &str,
                count: usize,
            ) -> Result<Vec<String>, TagSuggestionError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn use_case(generator: MockTagGenerator, retry: RetryPolicy) -> SuggestTagsUseCaseImpl {
        SuggestTagsUseCaseImpl {
            generator: Arc::new(generator),
            logger: mock_logger(),
            retry,
        }
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn params(content: &str) -> SuggestTagsParams {
        SuggestTagsParams {
            content: content.to_string(),
        }
    }

    fn as_strings(tags: Vec<Hashtag>) -> Vec<String> {
        tags.into_iter().map(Hashtag::into_inner).collect()
    }

    #[tokio::test]
    async fn should_return_upstream_tags_in_order() {
        let mut generator = MockTagGenerator::new();
        generator
            .expect_generate()
            .with(eq("Just shipped my first React app!"), eq(TAG_COUNT))
            .times(1)
            .returning(|_, _| {
                Ok(strings(&[
                    "react",
                    "webdev",
                    "coding",
                    "javascript",
                    "buildinpublic",
                ]))
            });

        let result = use_case(generator, RetryPolicy::none())
            .execute(params("Just shipped my first React app!"))
            .await;

        assert_eq!(
            as_strings(result.unwrap()),
            vec!["react", "webdev", "coding", "javascript", "buildinpublic"]
        );
    }

    #[tokio::test]
    async fn should_forward_trimmed_content() {
        let mut generator = MockTagGenerator::new();
        generator
            .expect_generate()
            .with(eq("hello"), eq(TAG_COUNT))
            .times(1)
            .returning(|_, _| Ok(strings(&["greeting"])));

        let result = use_case(generator, RetryPolicy::none())
            .execute(params("   hello \n"))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_reject_empty_content_without_calling_upstream() {
        let mut generator = MockTagGenerator::new();
        generator.expect_generate().times(0);

        let result = use_case(generator, RetryPolicy::none())
            .execute(params(""))
            .await;

        assert_eq!(result.unwrap_err(), TagSuggestionError::InvalidInput);
    }

    #[tokio::test]
    async fn should_reject_whitespace_content_without_calling_upstream() {
        let mut generator = MockTagGenerator::new();
        generator.expect_generate().times(0);

        let result = use_case(generator, RetryPolicy::new(3, Duration::ZERO))
            .execute(params(" \t \n"))
            .await;

        assert_eq!(result.unwrap_err(), TagSuggestionError::InvalidInput);
    }

    #[tokio::test]
    async fn should_strip_markers_from_upstream_tags() {
        let mut generator = MockTagGenerator::new();
        generator
            .expect_generate()
            .times(1)
            .returning(|_, _| Ok(strings(&["#rust", "## async ", "tokio"])));

        let tags = as_strings(
            use_case(generator, RetryPolicy::none())
                .execute(params("Learning async Rust"))
                .await
                .unwrap(),
        );

        assert_eq!(tags, vec!["rust", "async", "tokio"]);
        assert!(tags.iter().all(|t| !t.contains('#')));
    }

    #[tokio::test]
    async fn should_truncate_extra_upstream_tags() {
        let mut generator = MockTagGenerator::new();
        generator
            .expect_generate()
            .times(1)
            .returning(|_, _| Ok(strings(&["a", "b", "c", "d", "e", "f", "g"])));

        let tags = use_case(generator, RetryPolicy::none())
            .execute(params("many tags"))
            .await
            .unwrap();

        assert_eq!(tags.len(), TAG_COUNT);
    }

    #[tokio::test]
    async fn should_fail_as_unavailable_when_upstream_unreachable() {
        let mut generator = MockTagGenerator::new();
        generator
            .expect_generate()
            .times(1)
            .returning(|_, _| Err(TagSuggestionError::UpstreamUnavailable));

        let result = use_case(generator, RetryPolicy::none())
            .execute(params("hello"))
            .await;

        assert_eq!(result.unwrap_err(), TagSuggestionError::UpstreamUnavailable);
    }

    #[tokio::test]
    async fn should_fail_as_malformed_when_upstream_output_unparseable() {
        let mut generator = MockTagGenerator::new();
        generator
            .expect_generate()
            .times(1)
            .returning(|_, _| Err(TagSuggestionError::UpstreamMalformed));

        let result = use_case(generator, RetryPolicy::new(2, Duration::ZERO))
            .execute(params("hello"))
            .await;

        assert_eq!(result.unwrap_err(), TagSuggestionError::UpstreamMalformed);
    }

    #[tokio::test]
    async fn should_fail_as_malformed_when_no_usable_tag_returned() {
        let mut generator = MockTagGenerator::new();
        generator
            .expect_generate()
            .times(1)
            .returning(|_, _| Ok(strings(&["#", "  "])));

        let result = use_case(generator, RetryPolicy::none())
            .execute(params("hello"))
            .await;

        assert_eq!(result.unwrap_err(), TagSuggestionError::UpstreamMalformed);
    }

    #[tokio::test]
    async fn should_fail_as_malformed_when_upstream_returns_empty_array() {
        let mut generator = MockTagGenerator::new();
        generator
            .expect_generate()
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let result = use_case(generator, RetryPolicy::none())
            .execute(params("hello"))
            .await;

        assert_eq!(result.unwrap_err(), TagSuggestionError::UpstreamMalformed);
    }

    #[tokio::test(start_paused = true)]
    async fn should_retry_transient_failures_up_to_policy() {
        let mut generator = MockTagGenerator::new();
        let mut seq = mockall::Sequence::new();
        generator
            .expect_generate()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(TagSuggestionError::UpstreamUnavailable));
        generator
            .expect_generate()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(strings(&["rust"])));

        let result = use_case(generator, RetryPolicy::new(1, Duration::from_millis(500)))
            .execute(params("hello"))
            .await;

        assert_eq!(as_strings(result.unwrap()), vec!["rust"]);
    }

    #[tokio::test(start_paused = true)]
    async fn should_give_up_after_retries_exhausted() {
        let mut generator = MockTagGenerator::new();
        generator
            .expect_generate()
            .times(3)
            .returning(|_, _| Err(TagSuggestionError::UpstreamUnavailable));

        let result = use_case(generator, RetryPolicy::new(2, Duration::from_millis(100)))
            .execute(params("hello"))
            .await;

        assert_eq!(result.unwrap_err(), TagSuggestionError::UpstreamUnavailable);
    }
}
