//! Registration screen.
//!
//! Account creation belongs to the identity provider; this screen only links
//! back to the login form.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};
use vaultgate_core::routing::{Navigator, RouteError, Screen};

use crate::common::{centered_area, hint_line, render_panel};
use crate::effects::UiEffect;

/// # Errors
/// Propagates a `RouteError` from the navigator.
pub fn handle_key(nav: &mut dyn Navigator, key: KeyEvent) -> Result<Vec<UiEffect>, RouteError> {
    match key.code {
        KeyCode::Esc => {
            nav.go_back();
        }
        KeyCode::Char('l') | KeyCode::Enter => nav.navigate(Screen::Login.key(), None)?,
        KeyCode::Char('q') => return Ok(vec![UiEffect::Quit]),
        _ => {}
    }
    Ok(vec![])
}

pub fn render_register(frame: &mut Frame, area: Rect) {
    let panel = centered_area(area, 48, 9);
    let inner = render_panel(frame, panel, "Create Account", Color::Magenta);

    let lines = vec![
        Line::from(""),
        Line::from("Sign-up is handled by your identity provider."),
        Line::from("Once your account exists, log in here."),
        Line::from(""),
        Line::from(""),
        hint_line(&[("Enter", "log in"), ("Esc", "back"), ("q", "quit")]),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
