use rosary_core::model::PublicUser;
use services::{AuthError, AuthService};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

impl AuthMode {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            AuthMode::Login => "Sign in",
            AuthMode::Register => "Create account",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub username: String,
    pub password: String,
    pub confirm: String,
}

impl AuthForm {
    #[must_use]
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            username: String::new(),
            password: String::new(),
            confirm: String::new(),
        }
    }

    /// Client-side checks run before anything is sent.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message when a field is missing or the
    /// confirmation does not match on registration.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.username.trim().is_empty() || self.password.is_empty() {
            return Err("Please enter a username and password");
        }
        if self.mode == AuthMode::Register && self.password != self.confirm {
            return Err("Passwords do not match");
        }
        Ok(())
    }
}

/// Validate then log in or register.
///
/// # Errors
///
/// Returns the message to show in the dialog.
pub async fn submit_auth(auth: &AuthService, form: &AuthForm) -> Result<PublicUser, String> {
    form.validate().map_err(str::to_owned)?;
    let result = match form.mode {
        AuthMode::Login => auth.login(&form.username, &form.password).await,
        AuthMode::Register => auth.register(&form.username, &form.password).await,
    };
    result.map_err(|err| match err {
        AuthError::Storage(_) => crate::views::ViewError::message().to_owned(),
        other => other.to_string(),
    })
}
