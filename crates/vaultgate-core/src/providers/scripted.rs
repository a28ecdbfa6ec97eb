//! Manually driven provider.
//!
//! Nothing happens until the owner calls `resolve` / `emit`; every callback
//! runs synchronously on the caller's thread, in call order.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::registry::ListenerRegistry;
use super::{AuthCallback, IdentityProvider, ProviderError, Subscription};
use crate::identity::Identity;

#[derive(Clone, Default)]
pub struct ScriptedProvider {
    registry: ListenerRegistry,
    fail_next: Arc<AtomicBool>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider whose initial determination will be `identity`.
    pub fn with_cached(identity: Identity) -> Self {
        Self {
            registry: ListenerRegistry::with_current(Some(identity)),
            fail_next: Arc::default(),
        }
    }

    /// Fires the initial determination for all pending subscribers.
    pub fn resolve(&self) -> usize {
        self.registry.resolve_all()
    }

    /// Emits a sign-in (`Some`) or sign-out (`None`) event.
    pub fn emit(&self, identity: Option<Identity>) {
        self.registry.set_current(identity);
    }

    /// Makes the next `subscribe` call fail.
    pub fn fail_next_subscribe(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    pub fn subscriber_count(&self) -> usize {
        self.registry.len()
    }
}

impl IdentityProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn subscribe(&self, callback: AuthCallback) -> Result<Subscription, ProviderError> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(ProviderError::Unavailable("scripted failure".to_string()));
        }
        let id = self.registry.add(callback);
        let registry = self.registry.clone();
        Ok(Subscription::new(move || registry.remove(id)))
    }
}
