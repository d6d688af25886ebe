use async_trait::async_trait;

use crate::domain::session::errors::SessionError;
use crate::domain::session::model::User;

pub struct LogInParams {
    pub email: String,
    pub password: String,
}

pub struct SignUpParams {
    pub email: String,
    pub password: String,
    pub confirm: String,
}

#[async_trait]
pub trait AuthenticateUseCase: Send + Sync {
    async fn sign_up(&self, params: SignUpParams) -> Result<User, SessionError>;
    async fn log_in(&self, params: LogInParams) -> Result<User, SessionError>;
    async fn log_out(&self) -> Result<(), SessionError>;
}
