//! Top-level view.
//!
//! Pure: reads `AppState` and draws the screen on top of the stack. While
//! the session is still initializing nothing is drawn.

use ratatui::Frame;
use vaultgate_core::routing::{RouterView, Screen};

use crate::features::{login, main_app, register, welcome};
use crate::state::AppState;

pub fn render(app: &AppState, frame: &mut Frame) {
    let RouterView::Mounted(nav) = app.shell.router().view() else {
        return;
    };
    let area = frame.area();

    match nav.screen() {
        Screen::Welcome => welcome::render_welcome(frame, area),
        Screen::Register => register::render_register(frame, area),
        Screen::Login => {
            if let Some(state) = &app.login {
                login::render_login(frame, state, area);
            }
        }
        Screen::MainApp => {
            main_app::render_main_app(frame, nav.tab(), app.shell.session_state().identity(), area);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use vaultgate_core::providers::ScriptedProvider;

    use super::*;

    fn screen_text(app: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_blank_until_mounted_then_welcome() {
        let provider = ScriptedProvider::new();
        let (tx, rx) = mpsc::channel();
        let mut app = AppState::new();
        app.shell.start(&provider, move |n| {
            let _ = tx.send(n);
        });

        assert!(screen_text(&app).trim().is_empty());

        provider.resolve();
        for notification in rx.try_iter() {
            app.shell.handle(notification);
        }
        assert!(screen_text(&app).contains("Vaultgate"));
    }
}
