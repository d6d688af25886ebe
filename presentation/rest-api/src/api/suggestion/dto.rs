use poem_openapi::Object;

use business::domain::tag_suggestion::model::Hashtag;

#[derive(Debug, Clone, Object)]
pub struct SuggestTagsRequest {
    /// Post draft to suggest tags for
    pub content: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct SuggestTagsResponse {
    /// Suggested tags, without the leading `#`, in upstream order
    pub tags: Vec<String>,
}

impl From<Vec<Hashtag>> for SuggestTagsResponse {
    fn from(tags: Vec<Hashtag>) -> Self {
        Self {
            tags: tags.into_iter().map(Hashtag::into_inner).collect(),
        }
    }
}
