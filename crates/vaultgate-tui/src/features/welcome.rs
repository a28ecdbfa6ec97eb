//! Welcome screen: entry point for signed-out users.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use vaultgate_core::routing::{Navigator, RouteError, Screen};

use crate::common::{centered_area, hint_line, render_panel};
use crate::effects::UiEffect;

/// # Errors
/// Propagates a `RouteError` from the navigator.
pub fn handle_key(nav: &mut dyn Navigator, key: KeyEvent) -> Result<Vec<UiEffect>, RouteError> {
    match key.code {
        KeyCode::Enter | KeyCode::Char('l') => nav.navigate(Screen::Login.key(), None)?,
        KeyCode::Char('r') => nav.navigate(Screen::Register.key(), None)?,
        KeyCode::Esc | KeyCode::Char('q') => return Ok(vec![UiEffect::Quit]),
        _ => {}
    }
    Ok(vec![])
}

pub fn render_welcome(frame: &mut Frame, area: Rect) {
    let panel = centered_area(area, 48, 10);
    let inner = render_panel(frame, panel, "Vaultgate", Color::Cyan);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Your files, encrypted.",
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(""),
        Line::from(Span::styled(
            "Log in or create an account to continue.",
            Style::default().fg(Color::Gray),
        ))
        .centered(),
        Line::from(""),
        Line::from(""),
        hint_line(&[("Enter", "log in"), ("r", "sign up"), ("q", "quit")]).centered(),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
