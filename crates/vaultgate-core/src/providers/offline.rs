use super::{AuthCallback, IdentityProvider, ProviderError, Subscription};

/// Provider that can never establish a session channel.
#[derive(Debug, Clone)]
pub struct OfflineProvider {
    reason: String,
}

impl OfflineProvider {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl IdentityProvider for OfflineProvider {
    fn name(&self) -> &'static str {
        "offline"
    }

    fn subscribe(&self, _callback: AuthCallback) -> Result<Subscription, ProviderError> {
        Err(ProviderError::Unavailable(self.reason.clone()))
    }
}
