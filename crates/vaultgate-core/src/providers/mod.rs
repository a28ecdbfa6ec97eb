//! Identity provider capability.
//!
//! A provider owns the real notion of "who is signed in" (network lookups,
//! token caches, ...) and reports it through a callback. This crate only
//! depends on the subscribe/unsubscribe shape defined here.
//!
//! ## Module Structure
//!
//! - `local.rs`: provider backed by the cached identity from config
//! - `offline.rs`: provider that never establishes a channel
//! - `scripted.rs`: manually driven provider for tests and demos
//! - `registry.rs`: listener bookkeeping shared by the providers above

mod local;
mod offline;
mod registry;
mod scripted;

use std::fmt;
use std::str::FromStr;

pub use local::LocalProvider;
pub use offline::OfflineProvider;
pub use scripted::ScriptedProvider;
use serde::{Deserialize, Serialize};

use crate::config::IdentityConfig;
use crate::identity::Identity;

/// Callback invoked by a provider whenever it determines the current identity.
///
/// Callbacks must not call back into the provider that invokes them.
pub type AuthCallback = Box<dyn FnMut(Option<Identity>) + Send + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The provider could not establish a session channel.
    #[error("identity provider unavailable: {0}")]
    Unavailable(String),
}

/// Source of identity notifications.
pub trait IdentityProvider {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Registers `callback`.
    ///
    /// The callback fires at least once per subscription with the initial
    /// determination (possibly `None`), before any later sign-in/sign-out
    /// events. Callbacks are delivered one at a time, in emission order.
    ///
    /// # Errors
    /// Returns `ProviderError::Unavailable` if no channel could be set up.
    fn subscribe(&self, callback: AuthCallback) -> Result<Subscription, ProviderError>;
}

/// Handle to a live provider subscription.
///
/// `unsubscribe` consumes the handle, and dropping an un-consumed handle runs
/// the same teardown, so teardown happens exactly once.
pub struct Subscription {
    teardown: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    pub fn new(teardown: impl FnOnce() + Send + 'static) -> Self {
        Self {
            teardown: Some(Box::new(teardown)),
        }
    }

    /// Subscription with nothing to tear down.
    pub fn noop() -> Self {
        Self { teardown: None }
    }

    /// Stops all further callbacks.
    pub fn unsubscribe(mut self) {
        self.run_teardown();
    }

    fn run_teardown(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_teardown();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.teardown.is_some())
            .finish()
    }
}

/// Provider implementations selectable from config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    Local,
    Offline,
}

impl ProviderKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ProviderKind::Local => "local",
            ProviderKind::Offline => "offline",
        }
    }
}

impl FromStr for ProviderKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(ProviderKind::Local),
            "offline" => Ok(ProviderKind::Offline),
            other => anyhow::bail!("Unknown identity provider '{other}' (expected local, offline)"),
        }
    }
}

/// Builds the provider described by `config`.
pub fn build_provider(config: &IdentityConfig) -> Box<dyn IdentityProvider> {
    match config.provider {
        ProviderKind::Local => Box::new(LocalProvider::new(
            config.cached.clone(),
            config.latency(),
        )),
        ProviderKind::Offline => Box::new(OfflineProvider::new("offline mode")),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn test_unsubscribe_runs_teardown_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let subscription = Subscription::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        subscription.unsubscribe();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_drop_runs_teardown() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        {
            let _subscription = Subscription::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_provider_kind_from_str() {
        assert_eq!(
            "local".parse::<ProviderKind>().unwrap(),
            ProviderKind::Local
        );
        assert_eq!(
            " Offline ".parse::<ProviderKind>().unwrap(),
            ProviderKind::Offline
        );
        assert!("firebase".parse::<ProviderKind>().is_err());
    }
}
