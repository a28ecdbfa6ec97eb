//! App shell: the composition of session tracking and routing.
//!
//! The shell owns the `SessionStore`, the `Router` and the one live
//! `AuthSession`. Provider notifications arrive on whatever thread the
//! provider uses; the owner forwards them (usually over a channel) back to
//! the thread that owns the shell and calls `handle`, so the store keeps a
//! single writer.

use crate::providers::IdentityProvider;
use crate::routing::{RouteGraph, Router, Screen};
use crate::session::{
    AuthNotification, AuthSession, SessionState, SessionStore, SessionTransition, WatchId,
};

/// Result of handling one notification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellUpdate {
    /// Effective session transition, if any.
    pub transition: Option<SessionTransition>,
    /// Initial route, set only on the call that mounted the screen graph.
    pub mounted: Option<Screen>,
}

pub struct AppShell {
    store: SessionStore,
    router: Router,
    session: Option<AuthSession>,
}

impl AppShell {
    pub fn new(graph: RouteGraph) -> Self {
        Self {
            store: SessionStore::new(),
            router: Router::new(graph),
            session: None,
        }
    }

    /// Subscribes to `provider`. Only the first call per shell subscribes;
    /// later calls return false.
    pub fn start<F>(&mut self, provider: &dyn IdentityProvider, sink: F) -> bool
    where
        F: FnMut(AuthNotification) + Send + 'static,
    {
        if self.session.is_some() {
            tracing::warn!(provider = provider.name(), "identity subscription already started");
            return false;
        }
        self.session = Some(AuthSession::start(provider, sink));
        true
    }

    /// Applies a provider notification and mounts the router on first resolution.
    pub fn handle(&mut self, notification: AuthNotification) -> ShellUpdate {
        let transition = self.store.apply(notification);
        if let Some(transition) = &transition {
            tracing::info!(
                from = transition.from.label(),
                to = transition.to.label(),
                user = transition.to.identity().map(|i| i.id.as_str()),
                "session changed"
            );
        }
        let mounted = self.router.on_session_state(self.store.state());
        ShellUpdate {
            transition,
            mounted,
        }
    }

    pub fn session_state(&self) -> &SessionState {
        self.store.state()
    }

    pub fn watch(&mut self, watcher: impl FnMut(&SessionState) + 'static) -> WatchId {
        self.store.watch(watcher)
    }

    pub fn unwatch(&mut self, id: WatchId) -> bool {
        self.store.unwatch(id)
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn router_mut(&mut self) -> &mut Router {
        &mut self.router
    }

    /// Whether the session still accepts provider notifications.
    pub fn is_subscribed(&self) -> bool {
        self.session.as_ref().is_some_and(AuthSession::is_active)
    }

    /// Ends the provider subscription. Idempotent.
    pub fn shutdown(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.end();
        }
    }
}

impl Drop for AppShell {
    fn drop(&mut self) {
        self.shutdown();
    }
}
