use tokio::sync::watch;

type Release = Box<dyn FnOnce() + Send + Sync>;

/// A live view over a collaborator's push notifications.
///
/// Each notification carries the full current snapshot. The release callback
/// detaches the listener on the collaborator side and runs exactly once,
/// either on [`Subscription::unsubscribe`] or when the subscription is dropped.
pub struct Subscription<T> {
    receiver: watch::Receiver<T>,
    release: Option<Release>,
}

impl<T: Clone> Subscription<T> {
    pub fn new(
        receiver: watch::Receiver<T>,
        release: impl FnOnce() + Send + Sync + 'static,
    ) -> Self {
        Self {
            receiver,
            release: Some(Box::new(release)),
        }
    }

    /// Latest snapshot, without waiting.
    pub fn current(&self) -> T {
        self.receiver.borrow().clone()
    }

    /// Waits for the next snapshot. Returns `None` once the publisher is gone.
    pub async fn changed(&mut self) -> Option<T> {
        self.receiver.changed().await.ok()?;
        Some(self.receiver.borrow_and_update().clone())
    }

    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}
