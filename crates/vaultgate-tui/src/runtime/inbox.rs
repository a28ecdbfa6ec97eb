//! Inbox channel types.

use tokio::sync::mpsc;
use vaultgate_core::session::AuthNotification;

use crate::events::UiEvent;

pub type UiEventSender = mpsc::UnboundedSender<UiEvent>;
pub type UiEventReceiver = mpsc::UnboundedReceiver<UiEvent>;

/// Session sink that forwards notifications into the inbox.
///
/// Sends fail only after the runtime dropped its receiver, at which point
/// nobody is left to care.
pub fn auth_sink(tx: UiEventSender) -> impl FnMut(AuthNotification) + Send + 'static {
    move |notification| {
        let _ = tx.send(UiEvent::Auth(notification));
    }
}
