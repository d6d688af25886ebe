use crate::domain::errors::StoreError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("session.invalid_email")]
    InvalidEmail,
    #[error("session.password_too_short")]
    PasswordTooShort,
    #[error("session.password_mismatch")]
    PasswordMismatch,
    /// The identity provider refused the credentials (unknown user, wrong password, email taken).
    #[error("session.rejected")]
    Rejected,
    #[error(transparent)]
    Provider(#[from] StoreError),
}
