use crate::domain::session::model::{CurrentUser, SessionContext};
use crate::domain::session::services::IdentityProvider;
use crate::domain::shared::subscription::Subscription;

/// Folds the identity provider's "current user changed" notifications into a
/// [`SessionContext`]. Dropping the tracker releases the provider listener.
pub struct SessionTracker {
    subscription: Subscription<CurrentUser>,
    context: SessionContext,
}

impl SessionTracker {
    /// Subscribes and applies whatever the provider already reported, so a
    /// session restored before this call is not missed.
    pub fn start(provider: &dyn IdentityProvider) -> Self {
        let subscription = provider.watch_current_user();
        let mut context = SessionContext::initial();
        if let Some(user) = subscription.current().reported() {
            context.apply(user);
        }

        Self {
            subscription,
            context,
        }
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    /// Waits for the next notification and applies it. Returns `None` once the
    /// provider stopped publishing; the last known context stays available.
    pub async fn next(&mut self) -> Option<&SessionContext> {
        loop {
            if let Some(user) = self.subscription.changed().await?.reported() {
                self.context.apply(user);
                return Some(&self.context);
            }
        }
    }

    pub fn stop(self) {
        self.subscription.unsubscribe();
    }
}
