use crate::domain::shared::value_objects::UserId;

use super::errors::SessionError;

pub const MIN_PASSWORD_LENGTH: usize = 6;

const EMAIL_PATTERN: &str = r"\S+@\S+\.\S+";

/// A signed-in user as reported by the identity provider.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub email: Option<String>,
    pub display_name: Option<String>,
}

/// What the identity provider last reported about the current user.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CurrentUser {
    /// Nothing reported yet, a stored session may still be restored.
    #[default]
    Restoring,
    SignedOut,
    SignedIn(User),
}

impl CurrentUser {
    /// The reported user, or `None` while the provider is still restoring.
    pub fn reported(self) -> Option<Option<User>> {
        match self {
            CurrentUser::Restoring => None,
            CurrentUser::SignedOut => Some(None),
            CurrentUser::SignedIn(user) => Some(Some(user)),
        }
    }
}

/// Session state handed explicitly to whatever needs the current user.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionContext {
    pub current_user: Option<User>,
    /// True until the identity provider reported the session state once.
    pub loading: bool,
}

/// What a protected page should do for the current session.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteAccess<'a> {
    Pending,
    Granted(&'a User),
    Denied,
}

impl SessionContext {
    pub fn initial() -> Self {
        Self {
            current_user: None,
            loading: true,
        }
    }

    pub fn signed_in(user: User) -> Self {
        Self {
            current_user: Some(user),
            loading: false,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            current_user: None,
            loading: false,
        }
    }

    /// Applies a "current user changed" notification.
    pub fn apply(&mut self, user: Option<User>) {
        self.current_user = user;
        self.loading = false;
    }

    pub fn access(&self) -> RouteAccess<'_> {
        match (&self.current_user, self.loading) {
            (_, true) => RouteAccess::Pending,
            (Some(user), false) => RouteAccess::Granted(user),
            (None, false) => RouteAccess::Denied,
        }
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::initial()
    }
}

/// Email and password checked locally before reaching the identity provider.
#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    pub fn new(email: &str, password: &str) -> Result<Self, SessionError> {
        let email = email.trim();
        let valid_email = regex::Regex::new(EMAIL_PATTERN)
            .map(|re| re.is_match(email))
            .unwrap_or(false);
        if !valid_email {
            return Err(SessionError::InvalidEmail);
        }
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(SessionError::PasswordTooShort);
        }
        Ok(Self {
            email: email.to_string(),
            password: password.to_string(),
        })
    }

    /// Sign-up variant: the confirmation must repeat the password.
    pub fn for_sign_up(
        email: &str,
        password: &str,
        confirm: &str,
    ) -> Result<Self, SessionError> {
        let credentials = Self::new(email, password)?;
        if password != confirm {
            return Err(SessionError::PasswordMismatch);
        }
        Ok(credentials)
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    pub fn of(password: &str) -> Self {
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return PasswordStrength::Weak;
        }
        let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
        let has_digit = password.chars().any(|c| c.is_ascii_digit());
        if has_upper && has_digit {
            PasswordStrength::Strong
        } else {
            PasswordStrength::Medium
        }
    }
}
