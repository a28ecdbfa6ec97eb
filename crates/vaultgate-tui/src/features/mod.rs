//! Feature slices for the TUI, one per screen.

pub mod login;
pub mod main_app;
pub mod register;
pub mod welcome;
