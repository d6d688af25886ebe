use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::session::errors::SessionError;
use crate::domain::session::model::{Credentials, User};
use crate::domain::session::services::IdentityProvider;
use crate::domain::session::use_cases::authenticate::{
    AuthenticateUseCase, LogInParams, SignUpParams,
};

pub struct AuthenticateUseCaseImpl {
    pub provider: Arc<dyn IdentityProvider>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AuthenticateUseCase for AuthenticateUseCaseImpl {
    async fn sign_up(&self, params: SignUpParams) -> Result<User, SessionError> {
        let credentials =
            Credentials::for_sign_up(&params.email, &params.password, &params.confirm)?;

        let user = self
            .provider
            .sign_up(&credentials)
            .await
            .inspect_err(|err| self.logger.warn(&format!("Sign-up failed: {}", err)))?;

        self.logger.info(&format!("User signed up: {}", user.id));
        Ok(user)
    }

    async fn log_in(&self, params: LogInParams) -> Result<User, SessionError> {
        let credentials = Credentials::new(&params.email, &params.password)?;

        let user = self
            .provider
            .log_in(&credentials)
            .await
            .inspect_err(|err| self.logger.warn(&format!("Log-in failed: {}", err)))?;

        self.logger.info(&format!("User logged in: {}", user.id));
        Ok(user)
    }

    async fn log_out(&self) -> Result<(), SessionError> {
        self.provider.log_out().await?;
        self.logger.info("User logged out");
        Ok(())
    }
}
