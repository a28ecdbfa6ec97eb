//! CLI command handlers.

pub mod check_email;
pub mod config;
pub mod session;
pub mod tui;
