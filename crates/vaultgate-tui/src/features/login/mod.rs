//! Login screen slice.
//!
//! The form logic lives in `vaultgate_core::login::LoginController`; this
//! slice adds keyboard focus and rendering on top of it.

mod render;
mod update;

pub use render::render_login;
pub use update::{handle_key, handle_paste};
use vaultgate_core::login::LoginController;

/// Focusable elements, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginFocus {
    #[default]
    Email,
    Password,
    Submit,
    SignUp,
}

impl LoginFocus {
    const ORDER: [LoginFocus; 4] = [
        LoginFocus::Email,
        LoginFocus::Password,
        LoginFocus::Submit,
        LoginFocus::SignUp,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn is_text_field(self) -> bool {
        matches!(self, LoginFocus::Email | LoginFocus::Password)
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoginScreenState {
    pub controller: LoginController,
    pub focus: LoginFocus,
}

impl LoginScreenState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves focus, validating the email when it loses focus.
    pub fn focus_to(&mut self, focus: LoginFocus) {
        if self.focus == LoginFocus::Email && focus != LoginFocus::Email {
            self.controller.blur_email();
        }
        self.focus = focus;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycles_both_ways() {
        assert_eq!(LoginFocus::SignUp.next(), LoginFocus::Email);
        assert_eq!(LoginFocus::Email.prev(), LoginFocus::SignUp);
        assert_eq!(LoginFocus::Password.next(), LoginFocus::Submit);
    }

    #[test]
    fn test_leaving_email_validates() {
        let mut state = LoginScreenState::new();
        state.focus_to(LoginFocus::Password);
        assert_eq!(state.controller.email_error_text(), Some("Email is required"));
    }

    #[test]
    fn test_moving_between_other_fields_does_not_validate() {
        let mut state = LoginScreenState::new();
        state.focus = LoginFocus::Password;
        state.focus_to(LoginFocus::Submit);
        assert_eq!(state.controller.email_error_text(), None);
    }
}
