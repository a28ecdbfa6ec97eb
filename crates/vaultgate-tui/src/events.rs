//! UI event types.

use crossterm::event::Event;
use vaultgate_core::session::AuthNotification;

/// Everything the reducer reacts to.
#[derive(Debug)]
pub enum UiEvent {
    /// Periodic tick emitted by the runtime.
    Tick,
    /// Raw terminal input.
    Terminal(Event),
    /// Identity notification forwarded from the provider subscription.
    Auth(AuthNotification),
}
