use std::sync::Arc;

use crate::domain::logger::Logger;
use crate::domain::post::errors::PostError;
use crate::domain::post::model::Post;
use crate::domain::post::store::PostStore;
use crate::domain::post::use_cases::watch_feed::WatchFeedUseCase;
use crate::domain::shared::subscription::Subscription;

pub struct WatchFeedUseCaseImpl {
    pub store: Arc<dyn PostStore>,
    pub logger: Arc<dyn Logger>,
}

impl WatchFeedUseCase for WatchFeedUseCaseImpl {
    fn execute(&self) -> Result<Subscription<Vec<Post>>, PostError> {
        self.logger.debug("Subscribing to public feed");

        let subscription = self.store.observe_feed().inspect_err(|err| {
            self.logger
                .error(&format!("Failed to subscribe to feed: {}", err))
        })?;

        Ok(subscription)
    }
}
