//! Application state.
//!
//! ```text
//! AppState
//! ├── shell: AppShell          session store + router + provider subscription
//! ├── login: Option<LoginScreenState>
//! └── should_quit
//! ```
//!
//! `login` exists exactly while the Login screen is on the navigation stack,
//! so its form survives a trip to Register and back.

use vaultgate_core::routing::{RouteGraph, Screen};
use vaultgate_core::shell::AppShell;

use crate::features::login::LoginScreenState;

pub struct AppState {
    pub shell: AppShell,
    pub login: Option<LoginScreenState>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            shell: AppShell::new(RouteGraph::standard()),
            login: None,
            should_quit: false,
        }
    }

    /// Screen on top of the stack, `None` while the session is unresolved.
    pub fn screen(&self) -> Option<Screen> {
        self.shell.router().current_screen()
    }

    /// Creates or drops the login form to follow the navigation stack.
    pub fn sync_screen_state(&mut self) {
        let login_on_stack = self
            .shell
            .router()
            .navigator()
            .is_some_and(|nav| nav.routes().iter().any(|r| r.screen == Screen::Login));
        match (login_on_stack, self.login.is_some()) {
            (true, false) => self.login = Some(LoginScreenState::new()),
            (false, true) => self.login = None,
            _ => {}
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
