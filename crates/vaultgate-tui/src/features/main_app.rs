//! Main app: the tabbed area shown to signed-in users.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};
use vaultgate_core::Identity;
use vaultgate_core::routing::{NavigationStack, Navigator, RouteError, Tab};

use crate::common::hint_line;
use crate::effects::UiEffect;

/// Tab selection goes through the navigator by tab key, like any other
/// navigation request.
///
/// # Errors
/// Propagates a `RouteError` from the navigator.
pub fn handle_key(nav: &mut NavigationStack, key: KeyEvent) -> Result<Vec<UiEffect>, RouteError> {
    let target = match key.code {
        KeyCode::Right | KeyCode::Tab => Some(nav.tab().next()),
        KeyCode::Left | KeyCode::BackTab => Some(nav.tab().prev()),
        KeyCode::Char(c @ '1'..='9') => tab_for_digit(c),
        KeyCode::Esc => {
            nav.go_back();
            None
        }
        KeyCode::Char('q') => return Ok(vec![UiEffect::Quit]),
        _ => None,
    };
    if let Some(tab) = target {
        nav.navigate(tab.key(), None)?;
    }
    Ok(vec![])
}

fn tab_for_digit(c: char) -> Option<Tab> {
    let index = c.to_digit(10)? as usize;
    Tab::all().get(index.checked_sub(1)?).copied()
}

pub fn render_main_app(frame: &mut Frame, tab: Tab, identity: Option<&Identity>, area: Rect) {
    let [tabs_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    let titles: Vec<Line> = Tab::all().iter().map(|t| Line::from(t.key())).collect();
    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(" Vaultgate "))
        .select(tab.index())
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider("|");
    frame.render_widget(tabs, tabs_area);

    let account = identity.map_or_else(
        || "Not signed in".to_string(),
        |i| format!("Signed in as {}", i.display_name()),
    );
    let body = vec![
        Line::from(tab_blurb(tab)),
        Line::from(""),
        Line::from(account).style(Style::default().fg(Color::Gray)),
    ];
    frame.render_widget(
        Paragraph::new(body).block(Block::default().borders(Borders::ALL).title(format!(" {tab} "))),
        body_area,
    );

    frame.render_widget(
        Paragraph::new(hint_line(&[
            ("←/→", "switch tab"),
            ("1-3", "jump"),
            ("Esc", "back"),
            ("q", "quit"),
        ])),
        footer_area,
    );
}

fn tab_blurb(tab: Tab) -> &'static str {
    match tab {
        Tab::MyFiles => "Your encrypted files will appear here.",
        Tab::Encrypt => "Pick a file to encrypt.",
        Tab::Profile => "Account details.",
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use vaultgate_core::routing::{RouteGraph, Screen};

    use super::*;

    fn press(nav: &mut NavigationStack, code: KeyCode) -> Vec<UiEffect> {
        handle_key(nav, KeyEvent::new(code, KeyModifiers::NONE)).unwrap()
    }

    #[test]
    fn test_arrows_cycle_tabs() {
        let mut nav = NavigationStack::new(RouteGraph::standard(), Screen::MainApp);
        press(&mut nav, KeyCode::Right);
        assert_eq!(nav.tab(), Tab::Encrypt);
        press(&mut nav, KeyCode::Left);
        press(&mut nav, KeyCode::Left);
        assert_eq!(nav.tab(), Tab::Profile);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_digits_jump_to_tab() {
        let mut nav = NavigationStack::new(RouteGraph::standard(), Screen::MainApp);
        press(&mut nav, KeyCode::Char('3'));
        assert_eq!(nav.tab(), Tab::Profile);
        press(&mut nav, KeyCode::Char('9'));
        assert_eq!(nav.tab(), Tab::Profile);
        press(&mut nav, KeyCode::Char('0'));
        assert_eq!(nav.tab(), Tab::Profile);
    }

    #[test]
    fn test_q_quits() {
        let mut nav = NavigationStack::new(RouteGraph::standard(), Screen::MainApp);
        assert_eq!(press(&mut nav, KeyCode::Char('q')), vec![UiEffect::Quit]);
    }
}
