use std::collections::VecDeque;
use std::mem;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::AuthCallback;
use crate::identity::Identity;

struct Listener {
    id: u64,
    /// `None` only while the callback is being invoked.
    callback: Option<AuthCallback>,
    /// Whether the initial determination has been queued.
    resolved: bool,
}

#[derive(Default)]
struct Inner {
    current: Option<Identity>,
    listeners: Vec<Listener>,
    next_id: u64,
    pending: VecDeque<(u64, Option<Identity>)>,
    delivering: bool,
}

/// Listener list plus the provider's current identity.
///
/// Later events only go to listeners that already received their initial
/// determination, which keeps "initial first" ordering per listener.
///
/// Events go through a queue drained by one caller at a time, and callbacks
/// run with the lock released. A callback may emit, subscribe or drop its
/// own subscription; anything it emits is delivered after it returns.
#[derive(Clone, Default)]
pub(super) struct ListenerRegistry {
    inner: Arc<Mutex<Inner>>,
}

impl ListenerRegistry {
    pub(super) fn with_current(current: Option<Identity>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                current,
                ..Inner::default()
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(super) fn add(&self, callback: AuthCallback) -> u64 {
        let mut inner = self.lock();
        let id = inner.next_id;
        inner.next_id = inner.next_id.wrapping_add(1);
        inner.listeners.push(Listener {
            id,
            callback: Some(callback),
            resolved: false,
        });
        id
    }

    pub(super) fn remove(&self, id: u64) {
        let removed: Vec<Listener> = {
            let mut inner = self.lock();
            let (removed, kept) = mem::take(&mut inner.listeners)
                .into_iter()
                .partition(|listener| listener.id == id);
            inner.listeners = kept;
            inner.pending.retain(|(target, _)| *target != id);
            removed
        };
        // Callbacks are dropped outside the lock.
        drop(removed);
    }

    pub(super) fn len(&self) -> usize {
        self.lock().listeners.len()
    }

    pub(super) fn current(&self) -> Option<Identity> {
        self.lock().current.clone()
    }

    /// Delivers the initial determination to one listener.
    ///
    /// Returns false if the listener is gone or already resolved.
    pub(super) fn resolve(&self, id: u64) -> bool {
        {
            let mut inner = self.lock();
            let current = inner.current.clone();
            let Some(listener) = inner.listeners.iter_mut().find(|l| l.id == id) else {
                return false;
            };
            if listener.resolved {
                return false;
            }
            listener.resolved = true;
            inner.pending.push_back((id, current));
        }
        self.deliver();
        true
    }

    /// Delivers the initial determination to every unresolved listener.
    pub(super) fn resolve_all(&self) -> usize {
        let queued = {
            let mut inner = self.lock();
            let current = inner.current.clone();
            let mut ids = Vec::new();
            for listener in inner.listeners.iter_mut().filter(|l| !l.resolved) {
                listener.resolved = true;
                ids.push(listener.id);
            }
            for id in &ids {
                inner.pending.push_back((*id, current.clone()));
            }
            ids.len()
        };
        self.deliver();
        queued
    }

    /// Sets the current identity and notifies resolved listeners.
    pub(super) fn set_current(&self, identity: Option<Identity>) {
        {
            let mut inner = self.lock();
            inner.current.clone_from(&identity);
            let ids: Vec<u64> = inner
                .listeners
                .iter()
                .filter(|l| l.resolved)
                .map(|l| l.id)
                .collect();
            for id in ids {
                inner.pending.push_back((id, identity.clone()));
            }
        }
        self.deliver();
    }

    /// Drains the queue unless another caller already is.
    fn deliver(&self) {
        let mut inner = self.lock();
        if inner.delivering {
            return;
        }
        inner.delivering = true;

        loop {
            let Some((id, identity)) = inner.pending.pop_front() else {
                break;
            };
            let taken = inner
                .listeners
                .iter_mut()
                .find(|l| l.id == id)
                .and_then(|l| l.callback.take());
            let Some(mut callback) = taken else {
                continue;
            };

            drop(inner);
            callback(identity);
            inner = self.lock();

            match inner.listeners.iter().position(|l| l.id == id) {
                Some(pos) => inner.listeners[pos].callback = Some(callback),
                None => {
                    // Unsubscribed from inside its own callback.
                    drop(inner);
                    drop(callback);
                    inner = self.lock();
                }
            }
        }

        inner.delivering = false;
    }
}
