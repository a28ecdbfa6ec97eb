//! Login screen controller.
//!
//! Glues keystrokes to the validators and the navigator. The email error is
//! sticky: it only appears after an explicit validation (blur or submit), and
//! once shown it is re-checked on every keystroke until it clears.

use crate::routing::{Navigator, RouteError, Screen};
use crate::validation::{self, EmailErrorKind};

/// Raw form contents plus the displayed email error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginFormState {
    pub email: String,
    pub password: String,
    /// Password shown in clear text. Hidden by default.
    pub reveal_password: bool,
    pub email_error: Option<EmailErrorKind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The button is disabled; nothing happened.
    Disabled,
    /// The email failed validation; the error is now displayed.
    Rejected(EmailErrorKind),
    Navigated,
}

/// State and handlers of one Login screen instance.
#[derive(Debug, Clone, Default)]
pub struct LoginController {
    form: LoginFormState,
}

impl LoginController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &LoginFormState {
        &self.form
    }

    pub fn email_error_text(&self) -> Option<&'static str> {
        self.form.email_error.map(EmailErrorKind::message)
    }

    pub fn set_email(&mut self, text: impl Into<String>) {
        self.form.email = text.into();
        if self.form.email_error.is_some() {
            self.validate_email();
        }
    }

    /// Validation when the email field loses focus.
    pub fn blur_email(&mut self) -> bool {
        self.validate_email()
    }

    pub fn set_password(&mut self, text: impl Into<String>) {
        self.form.password = text.into();
    }

    pub fn toggle_password_visibility(&mut self) {
        self.form.reveal_password = !self.form.reveal_password;
    }

    pub fn can_submit(&self) -> bool {
        validation::can_submit(&self.form.email, &self.form.password)
    }

    /// Handles a press of the login button.
    ///
    /// # Errors
    /// Propagates a `RouteError` from the navigator.
    pub fn submit(&mut self, navigator: &mut dyn Navigator) -> Result<SubmitOutcome, RouteError> {
        if !self.can_submit() {
            return Ok(SubmitOutcome::Disabled);
        }
        // Enabled implies a non-empty password, so only the email can fail.
        if let Err(kind) = validation::validate_email(&self.form.email) {
            self.form.email_error = Some(kind);
            return Ok(SubmitOutcome::Rejected(kind));
        }
        self.form.email_error = None;
        navigator.navigate(Screen::MainApp.key(), None)?;
        Ok(SubmitOutcome::Navigated)
    }

    /// "Don't have an account? Sign up".
    ///
    /// # Errors
    /// Propagates a `RouteError` from the navigator.
    pub fn open_register(&self, navigator: &mut dyn Navigator) -> Result<(), RouteError> {
        navigator.navigate(Screen::Register.key(), None)
    }

    fn validate_email(&mut self) -> bool {
        match validation::validate_email(&self.form.email) {
            Ok(()) => {
                self.form.email_error = None;
                true
            }
            Err(kind) => {
                self.form.email_error = Some(kind);
                false
            }
        }
    }
}
