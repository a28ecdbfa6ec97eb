//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! The reducer only mutates `AppState`; anything touching the terminal or
//! the provider subscription happens in the runtime.

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEffect {
    /// End the provider subscription and leave the event loop.
    Quit,
}
