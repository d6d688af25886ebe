use crate::domain::errors::StoreError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PostError {
    #[error("post.content_empty")]
    ContentEmpty,
    #[error("post.not_authenticated")]
    NotAuthenticated,
    #[error(transparent)]
    Store(#[from] StoreError),
}
