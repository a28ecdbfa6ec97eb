//! Provider backed by a locally cached identity.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;

use super::registry::ListenerRegistry;
use super::{AuthCallback, IdentityProvider, ProviderError, Subscription};
use crate::identity::Identity;

/// Resolves the cached identity after `latency`, on the tokio runtime.
///
/// `sign_in` / `sign_out` emit later events to every subscriber that has
/// already received its initial determination.
#[derive(Clone)]
pub struct LocalProvider {
    registry: ListenerRegistry,
    latency: Duration,
}

impl LocalProvider {
    pub fn new(cached: Option<Identity>, latency: Duration) -> Self {
        Self {
            registry: ListenerRegistry::with_current(cached),
            latency,
        }
    }

    pub fn current(&self) -> Option<Identity> {
        self.registry.current()
    }

    pub fn sign_in(&self, identity: Identity) {
        tracing::debug!(user = %identity.id, "local provider sign-in");
        self.registry.set_current(Some(identity));
    }

    pub fn sign_out(&self) {
        tracing::debug!("local provider sign-out");
        self.registry.set_current(None);
    }

    pub fn subscriber_count(&self) -> usize {
        self.registry.len()
    }
}

impl IdentityProvider for LocalProvider {
    fn name(&self) -> &'static str {
        "local"
    }

    fn subscribe(&self, callback: AuthCallback) -> Result<Subscription, ProviderError> {
        let handle = Handle::try_current()
            .map_err(|e| ProviderError::Unavailable(format!("no async runtime: {e}")))?;

        let id = self.registry.add(callback);
        let cancel = CancellationToken::new();

        let registry = self.registry.clone();
        let task_cancel = cancel.clone();
        let latency = self.latency;
        handle.spawn(async move {
            tokio::select! {
                () = task_cancel.cancelled() => {}
                () = tokio::time::sleep(latency) => {
                    registry.resolve(id);
                }
            }
        });

        let registry = self.registry.clone();
        Ok(Subscription::new(move || {
            cancel.cancel();
            registry.remove(id);
        }))
    }
}
