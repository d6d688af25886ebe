use async_trait::async_trait;

use crate::domain::errors::StoreError;
use crate::domain::shared::subscription::Subscription;
use crate::domain::shared::value_objects::DocumentId;

use super::model::{NewPost, Post};

/// Port for the managed document store holding the `posts` collection.
#[async_trait]
pub trait PostStore: Send + Sync {
    async fn create(&self, post: NewPost) -> Result<DocumentId, StoreError>;

    /// Live query over all posts, newest first. Every change pushes the full set.
    fn observe_feed(&self) -> Result<Subscription<Vec<Post>>, StoreError>;
}
