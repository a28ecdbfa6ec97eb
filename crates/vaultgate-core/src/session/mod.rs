//! Session tracking.
//!
//! `AuthSession` bridges the identity provider's callbacks into
//! `AuthNotification`s; `SessionStore` is the single writer of
//! `SessionState` and the only consumer of those notifications.
//!
//! ```text
//! IdentityProvider --callback--> AuthSession --AuthNotification--> SessionStore --> watchers
//! ```

mod auth_session;
mod store;

pub use auth_session::{AuthNotification, AuthSession};
pub use store::{SessionState, SessionStore, SessionTransition, WatchId};
