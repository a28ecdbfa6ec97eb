//! Interactive mode.

use anyhow::Result;
use vaultgate_core::config::Config;
use vaultgate_core::providers;

pub fn run(config: &Config) -> Result<()> {
    let provider = providers::build_provider(&config.identity);
    tracing::info!(provider = provider.name(), "starting tui");
    vaultgate_tui::run_app(provider.as_ref())
}
