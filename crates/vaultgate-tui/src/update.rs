//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use vaultgate_core::routing::{RouteError, Screen};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::{login, main_app, register, welcome};
use crate::state::AppState;

/// The main reducer function.
///
/// # Errors
/// Returns a `RouteError` when a screen asks for a destination that is not
/// in the route graph. The caller treats that as fatal.
pub fn update(app: &mut AppState, event: UiEvent) -> Result<Vec<UiEffect>, RouteError> {
    let effects = match event {
        UiEvent::Tick => vec![],
        UiEvent::Auth(notification) => {
            app.shell.handle(notification);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event)?,
    };
    app.sync_screen_state();
    Ok(effects)
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Result<Vec<UiEffect>, RouteError> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        Event::Paste(text) => {
            if app.screen() == Some(Screen::Login)
                && let Some(state) = app.login.as_mut()
            {
                login::handle_paste(state, &text);
            }
            Ok(vec![])
        }
        _ => Ok(vec![]),
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<Vec<UiEffect>, RouteError> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(vec![UiEffect::Quit]);
    }

    let Some(nav) = app.shell.router_mut().navigator_mut() else {
        // Nothing is mounted yet; only quitting is possible.
        return Ok(match key.code {
            KeyCode::Esc | KeyCode::Char('q') => vec![UiEffect::Quit],
            _ => vec![],
        });
    };

    match nav.screen() {
        Screen::Welcome => welcome::handle_key(nav, key),
        Screen::Register => register::handle_key(nav, key),
        Screen::MainApp => main_app::handle_key(nav, key),
        Screen::Login => match app.login.as_mut() {
            Some(state) => login::handle_key(state, nav, key),
            None => Ok(vec![]),
        },
    }
}
