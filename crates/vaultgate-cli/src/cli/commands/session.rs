//! Headless session check.
//!
//! Subscribes once, waits for the provider's first determination and prints
//! where the app would start.

use std::time::Duration;

use anyhow::{Context, Result};
use tokio::sync::mpsc;
use vaultgate_core::config::Config;
use vaultgate_core::providers;
use vaultgate_core::routing::RouteGraph;
use vaultgate_core::session::SessionState;
use vaultgate_core::shell::AppShell;

/// Extra time allowed on top of the configured provider latency.
const RESOLVE_GRACE: Duration = Duration::from_secs(5);

pub async fn run(config: &Config) -> Result<()> {
    let provider = providers::build_provider(&config.identity);
    let (tx, mut rx) = mpsc::unbounded_channel();

    let mut shell = AppShell::new(RouteGraph::standard());
    shell.start(provider.as_ref(), move |notification| {
        let _ = tx.send(notification);
    });

    let deadline = config.identity.latency() + RESOLVE_GRACE;
    let notification = tokio::time::timeout(deadline, rx.recv())
        .await
        .with_context(|| format!("{} did not report a session in time", provider.name()))?
        .context("identity provider closed before reporting a session")?;

    let update = shell.handle(notification);
    shell.shutdown();

    println!("session: {}", describe(shell.session_state()));
    if let Some(route) = update.mounted {
        println!("route: {route}");
    }
    Ok(())
}

fn describe(state: &SessionState) -> String {
    match state.identity() {
        Some(identity) => format!("{} ({})", state.label(), identity.display_name()),
        None => state.label().to_string(),
    }
}
