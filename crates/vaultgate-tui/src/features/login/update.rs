//! Login screen reducer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use vaultgate_core::routing::{Navigator, RouteError};

use super::{LoginFocus, LoginScreenState};
use crate::effects::UiEffect;

/// Handles a key press while Login is on top.
///
/// # Errors
/// Propagates a `RouteError` from the navigator.
pub fn handle_key(
    state: &mut LoginScreenState,
    nav: &mut dyn Navigator,
    key: KeyEvent,
) -> Result<Vec<UiEffect>, RouteError> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => {
            nav.go_back();
        }
        KeyCode::Tab | KeyCode::Down => state.focus_to(state.focus.next()),
        KeyCode::BackTab | KeyCode::Up => state.focus_to(state.focus.prev()),
        KeyCode::Char('r') if ctrl => state.controller.toggle_password_visibility(),
        KeyCode::Enter => match state.focus {
            LoginFocus::SignUp => state.controller.open_register(nav)?,
            _ => {
                state.controller.submit(nav)?;
            }
        },
        KeyCode::Backspace => edit_focused(state, |text| {
            text.pop();
        }),
        KeyCode::Char(c) if !ctrl => edit_focused(state, |text| text.push(c)),
        _ => {}
    }
    Ok(vec![])
}

/// Appends pasted text to the focused field.
pub fn handle_paste(state: &mut LoginScreenState, pasted: &str) {
    let single_line: String = pasted.chars().filter(|c| !c.is_control()).collect();
    edit_focused(state, |text| text.push_str(&single_line));
}

fn edit_focused(state: &mut LoginScreenState, edit: impl FnOnce(&mut String)) {
    let form = state.controller.form();
    match state.focus {
        LoginFocus::Email => {
            let mut text = form.email.clone();
            edit(&mut text);
            state.controller.set_email(text);
        }
        LoginFocus::Password => {
            let mut text = form.password.clone();
            edit(&mut text);
            state.controller.set_password(text);
        }
        LoginFocus::Submit | LoginFocus::SignUp => {}
    }
}
