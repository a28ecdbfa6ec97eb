use std::fmt;
use std::mem;

use super::AuthNotification;
use crate::identity::Identity;

/// Who is signed in, as far as the app knows.
///
/// `Initializing` is only ever the first state: there is no notification
/// that leads back to it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Initializing,
    Unauthenticated,
    Authenticated(Identity),
}

impl SessionState {
    pub fn is_initializing(&self) -> bool {
        matches!(self, SessionState::Initializing)
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            SessionState::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SessionState::Initializing => "initializing",
            SessionState::Unauthenticated => "unauthenticated",
            SessionState::Authenticated(_) => "authenticated",
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Authenticated(identity) => {
                write!(f, "authenticated as {}", identity.display_name())
            }
            other => f.write_str(other.label()),
        }
    }
}

/// An effective state change applied by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionTransition {
    pub from: SessionState,
    pub to: SessionState,
}

impl SessionTransition {
    /// True for the one transition that leaves `Initializing`.
    pub fn is_first_resolution(&self) -> bool {
        self.from.is_initializing()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WatchId(u64);

type Watcher = Box<dyn FnMut(&SessionState)>;

/// Single-writer container for `SessionState`.
///
/// Readers get a borrow or a snapshot; the only way to change the state is
/// `apply`, which takes a provider notification.
#[derive(Default)]
pub struct SessionStore {
    state: SessionState,
    watchers: Vec<(WatchId, Watcher)>,
    next_watch: u64,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn snapshot(&self) -> SessionState {
        self.state.clone()
    }

    /// Registers `watcher`, called after each effective transition.
    pub fn watch(&mut self, watcher: impl FnMut(&SessionState) + 'static) -> WatchId {
        let id = WatchId(self.next_watch);
        self.next_watch = self.next_watch.wrapping_add(1);
        self.watchers.push((id, Box::new(watcher)));
        id
    }

    /// Returns false if `id` was not registered.
    pub fn unwatch(&mut self, id: WatchId) -> bool {
        let before = self.watchers.len();
        self.watchers.retain(|(watch_id, _)| *watch_id != id);
        self.watchers.len() != before
    }

    /// Applies a provider notification.
    ///
    /// Returns `None` when the notification does not change the state
    /// (same identity again, or "none" while already signed out).
    pub fn apply(&mut self, notification: AuthNotification) -> Option<SessionTransition> {
        let next = match notification.into_identity() {
            Some(identity) => match &self.state {
                SessionState::Authenticated(current) if *current == identity => return None,
                _ => SessionState::Authenticated(identity),
            },
            None => match &self.state {
                SessionState::Unauthenticated => return None,
                _ => SessionState::Unauthenticated,
            },
        };

        let from = mem::replace(&mut self.state, next);
        for (_, watcher) in &mut self.watchers {
            watcher(&self.state);
        }

        Some(SessionTransition {
            from,
            to: self.state.clone(),
        })
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("state", &self.state)
            .field("watchers", &self.watchers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use proptest::prelude::*;

    use super::*;

    fn user(id: &str) -> Identity {
        Identity::new(id, Some(format!("{id}@example.com")))
    }

    fn signed_in(id: &str) -> AuthNotification {
        AuthNotification::new(Some(user(id)))
    }

    fn signed_out() -> AuthNotification {
        AuthNotification::new(None)
    }

    #[test]
    fn test_starts_initializing() {
        let store = SessionStore::new();
        assert!(store.state().is_initializing());
    }

    #[test]
    fn test_first_none_resolves_unauthenticated() {
        let mut store = SessionStore::new();
        let transition = store.apply(signed_out()).unwrap();
        assert!(transition.is_first_resolution());
        assert_eq!(transition.to, SessionState::Unauthenticated);
    }

    #[test]
    fn test_first_identity_resolves_authenticated() {
        let mut store = SessionStore::new();
        let transition = store.apply(signed_in("u1")).unwrap();
        assert!(transition.is_first_resolution());
        assert_eq!(store.snapshot(), SessionState::Authenticated(user("u1")));
    }

    #[test]
    fn test_same_identity_is_noop() {
        let mut store = SessionStore::new();
        store.apply(signed_in("u1"));
        assert!(store.apply(signed_in("u1")).is_none());
    }

    #[test]
    fn test_repeated_sign_out_is_noop() {
        let mut store = SessionStore::new();
        store.apply(signed_out());
        assert!(store.apply(signed_out()).is_none());
    }

    #[test]
    fn test_switching_identity() {
        let mut store = SessionStore::new();
        store.apply(signed_in("u1"));
        let transition = store.apply(signed_in("u2")).unwrap();
        assert!(!transition.is_first_resolution());
        assert_eq!(transition.from, SessionState::Authenticated(user("u1")));
        assert_eq!(transition.to, SessionState::Authenticated(user("u2")));
    }

    #[test]
    fn test_watchers_see_effective_transitions_only() {
        let mut store = SessionStore::new();
        let seen: Rc<RefCell<Vec<&'static str>>> = Rc::default();
        let sink = Rc::clone(&seen);
        let id = store.watch(move |state| sink.borrow_mut().push(state.label()));

        store.apply(signed_out());
        store.apply(signed_out());
        store.apply(signed_in("u1"));

        assert_eq!(*seen.borrow(), vec!["unauthenticated", "authenticated"]);

        assert!(store.unwatch(id));
        assert!(!store.unwatch(id));
        store.apply(signed_out());
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(SessionState::Initializing.to_string(), "initializing");
        assert_eq!(
            SessionState::Authenticated(user("u1")).to_string(),
            "authenticated as u1@example.com"
        );
    }

    fn notification_strategy() -> impl Strategy<Value = AuthNotification> {
        prop_oneof![
            Just(signed_out()),
            "[a-c]".prop_map(|id| signed_in(&id)),
        ]
    }

    proptest! {
        #[test]
        fn prop_initializing_only_as_first_state(
            notifications in prop::collection::vec(notification_strategy(), 0..20)
        ) {
            let mut store = SessionStore::new();
            let mut first_resolutions = 0;
            for notification in notifications {
                if let Some(transition) = store.apply(notification) {
                    prop_assert!(!transition.to.is_initializing());
                    if transition.is_first_resolution() {
                        first_resolutions += 1;
                    }
                }
                prop_assert!(!store.state().is_initializing());
            }
            prop_assert!(first_resolutions <= 1);
        }
    }
}
