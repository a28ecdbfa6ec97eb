//! Full-screen TUI for vaultgate.
//!
//! Renders the welcome, login, registration and main screens and feeds
//! keystrokes and identity notifications through a pure reducer.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};

use anyhow::Result;
pub use runtime::TuiRuntime;
use vaultgate_core::providers::IdentityProvider;

/// Runs the interactive app until the user quits.
///
/// Must be called from within a tokio runtime: providers may spawn tasks
/// when subscribed.
///
/// # Errors
/// Fails without a terminal, on terminal I/O errors, or when a screen asks
/// for a route that is not in the graph.
pub fn run_app(provider: &dyn IdentityProvider) -> Result<()> {
    if !stderr().is_terminal() {
        anyhow::bail!(
            "vaultgate requires a terminal.\n\
             Use `vaultgate session` for non-interactive use."
        );
    }

    let mut runtime = TuiRuntime::new(provider)?;
    runtime.run()
}
