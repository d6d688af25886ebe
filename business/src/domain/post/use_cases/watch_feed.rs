use crate::domain::post::errors::PostError;
use crate::domain::post::model::Post;
use crate::domain::shared::subscription::Subscription;

pub trait WatchFeedUseCase: Send + Sync {
    fn execute(&self) -> Result<Subscription<Vec<Post>>, PostError>;
}
