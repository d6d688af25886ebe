use async_trait::async_trait;

use crate::domain::post::errors::PostError;
use crate::domain::session::model::SessionContext;
use crate::domain::shared::value_objects::DocumentId;

pub struct CreatePostParams {
    pub session: SessionContext,
    pub content: String,
    pub tags: Vec<String>,
}

#[async_trait]
pub trait CreatePostUseCase: Send + Sync {
    async fn execute(&self, params: CreatePostParams) -> Result<DocumentId, PostError>;
}
