use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::post::errors::PostError;
use crate::domain::post::model::{Author, NewPost};
use crate::domain::post::store::PostStore;
use crate::domain::post::use_cases::create::{CreatePostParams, CreatePostUseCase};
use crate::domain::shared::value_objects::DocumentId;

pub struct CreatePostUseCaseImpl {
    pub store: Arc<dyn PostStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreatePostUseCase for CreatePostUseCaseImpl {
    async fn execute(&self, params: CreatePostParams) -> Result<DocumentId, PostError> {
        let user = params
            .session
            .current_user
            .as_ref()
            .ok_or(PostError::NotAuthenticated)?;

        if params.content.trim().is_empty() {
            return Err(PostError::ContentEmpty);
        }

        let post = NewPost {
            content: params.content,
            tags: params.tags,
            author: Author::for_user(user),
        };

        let id = self.store.create(post).await.inspect_err(|err| {
            self.logger
                .error(&format!("Failed to create post for {}: {}", user.id, err))
        })?;

        self.logger.info(&format!("Post created: {}", id));
        Ok(id)
    }
}
