//! TUI runtime: owns the terminal, runs the event loop, executes effects.
//!
//! All side effects happen here; the reducer stays pure.
//!
//! ## Inbox Pattern
//!
//! The provider subscription forwards every identity notification into
//! `inbox_tx` from whatever thread the provider uses. The runtime drains
//! `inbox_rx` each frame, so `AppShell::handle` only ever runs on the
//! runtime's thread.

pub(crate) mod inbox;

use std::io::Stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use inbox::{UiEventReceiver, UiEventSender};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;
use vaultgate_core::providers::IdentityProvider;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Poll duration between ticks.
pub const TICK_DURATION: Duration = Duration::from_millis(100);

/// Full-screen TUI runtime.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    /// Kept so the inbox never reports disconnected while we run.
    _inbox_tx: UiEventSender,
    inbox_rx: UiEventReceiver,
    last_tick: Instant,
}

impl TuiRuntime {
    /// Enters the alternate screen and subscribes to `provider`.
    ///
    /// # Errors
    /// Returns an error if the terminal cannot be set up.
    pub fn new(provider: &dyn IdentityProvider) -> Result<Self> {
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();
        let mut state = AppState::new();
        state.shell.start(provider, inbox::auth_sink(inbox_tx.clone()));

        Ok(Self {
            terminal,
            state,
            _inbox_tx: inbox_tx,
            inbox_rx,
            last_tick: Instant::now(),
        })
    }

    /// Runs the event loop until a `Quit` effect.
    ///
    /// # Errors
    /// Returns an error on terminal I/O failure or an unknown route.
    pub fn run(&mut self) -> Result<()> {
        let mut dirty = true;

        while !self.state.should_quit {
            let events = self.collect_events()?;

            for event in events {
                dirty = true;
                let effects = update::update(&mut self.state, event)?;
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        let poll_duration = if events.is_empty() {
            TICK_DURATION.saturating_sub(self.last_tick.elapsed())
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= TICK_DURATION {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            match effect {
                UiEffect::Quit => {
                    tracing::info!(screen = ?self.state.screen(), "quit requested");
                    self.state.shell.shutdown();
                    self.state.should_quit = true;
                }
            }
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        self.state.shell.shutdown();
        let _ = terminal::restore_terminal();
    }
}
