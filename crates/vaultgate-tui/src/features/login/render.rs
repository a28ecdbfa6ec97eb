//! Login screen view.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::{LoginFocus, LoginScreenState};
use crate::common::{centered_area, hint_line, render_panel, text_width};

const PANEL_WIDTH: u16 = 52;
const PANEL_HEIGHT: u16 = 15;
const MASK: char = '•';

pub fn render_login(frame: &mut Frame, state: &LoginScreenState, area: Rect) {
    let panel = centered_area(area, PANEL_WIDTH, PANEL_HEIGHT);
    let inner = render_panel(frame, panel, "Log In", Color::Cyan);

    let form = state.controller.form();
    let password = password_display(&form.password, form.reveal_password);

    let mut lines = vec![
        Line::from(""),
        field_label("Email", state.focus == LoginFocus::Email),
        field_value(&form.email, "you@example.com"),
    ];
    lines.push(match state.controller.email_error_text() {
        Some(message) => Line::from(Span::styled(message, Style::default().fg(Color::Red))),
        None => Line::from(""),
    });
    lines.push(field_label("Password", state.focus == LoginFocus::Password));
    lines.push(field_value(&password, "password"));
    lines.push(Line::from(""));
    lines.push(submit_button(
        state.controller.can_submit(),
        state.focus == LoginFocus::Submit,
    ));
    lines.push(Line::from(""));
    lines.push(sign_up_link(state.focus == LoginFocus::SignUp));
    lines.push(Line::from(""));
    lines.push(hint_line(&[
        ("Tab", "next"),
        ("Enter", "select"),
        ("Ctrl+R", if form.reveal_password { "hide" } else { "show" }),
        ("Esc", "back"),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);

    let cursor = match state.focus {
        LoginFocus::Email => Some((2, text_width(&form.email))),
        LoginFocus::Password => Some((5, text_width(&password))),
        LoginFocus::Submit | LoginFocus::SignUp => None,
    };
    if let Some((row, col)) = cursor {
        let x = inner.x.saturating_add(2).saturating_add(col);
        frame.set_cursor_position((x.min(inner.right().saturating_sub(1)), inner.y + row));
    }
}

fn password_display(password: &str, reveal: bool) -> String {
    if reveal {
        password.to_string()
    } else {
        password.chars().map(|_| MASK).collect()
    }
}

fn field_label(label: &'static str, focused: bool) -> Line<'static> {
    let style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    Line::from(Span::styled(label, style))
}

fn field_value(value: &str, placeholder: &'static str) -> Line<'static> {
    if value.is_empty() {
        Line::from(vec![
            Span::raw("  "),
            Span::styled(placeholder, Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(vec![Span::raw("  "), Span::raw(value.to_string())])
    }
}

fn submit_button(enabled: bool, focused: bool) -> Line<'static> {
    let style = match (enabled, focused) {
        (false, _) => Style::default().fg(Color::DarkGray),
        (true, true) => Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        (true, false) => Style::default().fg(Color::Cyan),
    };
    Line::from(Span::styled("[ Log In ]", style)).centered()
}

fn sign_up_link(focused: bool) -> Line<'static> {
    let mut link = Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED);
    if focused {
        link = link.add_modifier(Modifier::BOLD | Modifier::REVERSED);
    }
    Line::from(vec![
        Span::styled("Don't have an account? ", Style::default().fg(Color::Gray)),
        Span::styled("Sign up", link),
    ])
    .centered()
}
