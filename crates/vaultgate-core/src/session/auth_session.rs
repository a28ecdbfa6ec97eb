use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use crate::identity::Identity;
use crate::providers::{IdentityProvider, Subscription};

/// One identity determination reported by the provider.
///
/// Only `AuthSession` can create these, so the session store can only ever
/// be driven by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthNotification {
    identity: Option<Identity>,
}

impl AuthNotification {
    pub(super) fn new(identity: Option<Identity>) -> Self {
        Self { identity }
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn into_identity(self) -> Option<Identity> {
        self.identity
    }
}

/// A single subscription to an identity provider.
///
/// Created once per app launch and ended when its owner is torn down.
/// After `end` (or drop) no notification reaches the sink, even if the
/// provider keeps calling.
pub struct AuthSession {
    provider: &'static str,
    subscription: Option<Subscription>,
    active: Arc<AtomicBool>,
}

impl AuthSession {
    /// Subscribes to `provider`, forwarding every determination to `sink`.
    ///
    /// If the provider cannot establish a channel, `sink` receives a single
    /// "no identity" notification before this returns. There is no retry.
    pub fn start<F>(provider: &dyn IdentityProvider, sink: F) -> Self
    where
        F: FnMut(AuthNotification) + Send + 'static,
    {
        let active = Arc::new(AtomicBool::new(true));
        let sink = Arc::new(Mutex::new(sink));

        let gate = Arc::clone(&active);
        let forward = Arc::clone(&sink);
        let result = provider.subscribe(Box::new(move |identity| {
            if !gate.load(Ordering::SeqCst) {
                return;
            }
            let mut sink = forward.lock().unwrap_or_else(PoisonError::into_inner);
            sink(AuthNotification::new(identity));
        }));

        let subscription = match result {
            Ok(subscription) => {
                tracing::info!(provider = provider.name(), "subscribed to identity provider");
                Some(subscription)
            }
            Err(err) => {
                tracing::warn!(provider = provider.name(), error = %err, "treating provider failure as signed out");
                let mut sink = sink.lock().unwrap_or_else(PoisonError::into_inner);
                sink(AuthNotification::new(None));
                None
            }
        };

        Self {
            provider: provider.name(),
            subscription,
            active,
        }
    }

    /// Whether notifications can still be delivered.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Tears the subscription down. Safe to call more than once.
    pub fn end(&mut self) {
        if !self.active.swap(false, Ordering::SeqCst) {
            return;
        }
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
        tracing::debug!(provider = self.provider, "identity subscription ended");
    }
}

impl Drop for AuthSession {
    fn drop(&mut self) {
        self.end();
    }
}
