use async_trait::async_trait;

use crate::domain::tag_suggestion::errors::TagSuggestionError;
use crate::domain::tag_suggestion::model::Hashtag;

pub struct SuggestTagsParams {
    pub content: String,
}

#[async_trait]
pub trait SuggestTagsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: SuggestTagsParams,
    ) -> Result<Vec<Hashtag>, TagSuggestionError>;
}
