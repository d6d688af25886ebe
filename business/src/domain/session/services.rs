use async_trait::async_trait;

use crate::domain::shared::subscription::Subscription;

use super::errors::SessionError;
use super::model::{Credentials, CurrentUser, User};

/// Port for the managed identity provider.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_up(&self, credentials: &Credentials) -> Result<User, SessionError>;
    async fn log_in(&self, credentials: &Credentials) -> Result<User, SessionError>;
    async fn log_out(&self) -> Result<(), SessionError>;

    /// "Current user changed" notifications. Holds [`CurrentUser::Restoring`]
    /// until the provider restored a stored session or found none.
    fn watch_current_user(&self) -> Subscription<CurrentUser>;
}
