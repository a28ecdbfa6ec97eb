//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use vaultgate_core::config::{self, Config};
use vaultgate_core::identity::Identity;
use vaultgate_core::logging;
use vaultgate_core::providers::ProviderKind;

mod commands;

#[derive(Parser)]
#[command(name = "vaultgate")]
#[command(version)]
#[command(about = "Session-gated navigation shell for an encrypted file vault")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    identity: IdentityArgs,
}

/// Overrides for the `[identity]` config section.
#[derive(clap::Args, Debug, Clone, Default)]
struct IdentityArgs {
    /// Identity provider to use (local, offline)
    #[arg(long, global = true)]
    provider: Option<String>,

    /// Start with a cached identity for this user ID (local provider)
    #[arg(long, value_name = "ID", global = true)]
    signed_in: Option<String>,

    /// Email of the `--signed-in` identity
    #[arg(long, requires = "signed_in", global = true)]
    email: Option<String>,
}

impl IdentityArgs {
    fn apply(&self, config: &mut Config) -> Result<()> {
        if let Some(provider) = self.provider.as_deref() {
            config.identity.provider = provider.parse::<ProviderKind>()?;
        }
        if let Some(id) = self.signed_in.as_deref() {
            let id = id.trim();
            if id.is_empty() {
                anyhow::bail!("--signed-in requires a non-empty user ID");
            }
            config.identity.cached = Some(Identity::new(id, self.email.clone()));
        }
        Ok(())
    }
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Resolve the current session without a UI and print the initial route
    Session,

    /// Validate an email address the way the login form does
    CheckEmail {
        /// Address to check
        email: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Print the config file path
    Path,
    /// Write a default config file
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::CheckEmail { email }) => commands::check_email::run(&email),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
        Some(Commands::Session) => {
            let config = load_config(&cli.identity)?;
            let _log_guard = logging::init(&config.logging).context("init logging")?;
            commands::session::run(&config).await
        }
        None => {
            let config = load_config(&cli.identity)?;
            let _log_guard = logging::init(&config.logging).context("init logging")?;
            commands::tui::run(&config)
        }
    }
}

fn load_config(identity: &IdentityArgs) -> Result<Config> {
    let mut config = Config::load().with_context(|| {
        format!("load config from {}", config::paths::config_path().display())
    })?;
    identity.apply(&mut config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(provider: Option<&str>, signed_in: Option<&str>, email: Option<&str>) -> IdentityArgs {
        IdentityArgs {
            provider: provider.map(str::to_string),
            signed_in: signed_in.map(str::to_string),
            email: email.map(str::to_string),
        }
    }

    #[test]
    fn test_identity_args_override_config() {
        let mut config = Config::default();
        args(Some("offline"), Some("u1"), Some("a@b.com"))
            .apply(&mut config)
            .unwrap();
        assert_eq!(config.identity.provider, ProviderKind::Offline);
        assert_eq!(
            config.identity.cached,
            Some(Identity::new("u1", Some("a@b.com".to_string())))
        );
    }

    #[test]
    fn test_no_args_keep_config() {
        let mut config = Config::default();
        IdentityArgs::default().apply(&mut config).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_blank_user_id_rejected() {
        let mut config = Config::default();
        assert!(args(None, Some("  "), None).apply(&mut config).is_err());
    }

    #[test]
    fn test_unknown_provider_rejected() {
        let mut config = Config::default();
        let err = args(Some("firebase"), None, None)
            .apply(&mut config)
            .unwrap_err();
        assert!(err.to_string().contains("firebase"));
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["vaultgate", "check-email", "a@b.com"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::CheckEmail { email }) if email == "a@b.com"));

        let cli =
            Cli::try_parse_from(["vaultgate", "session", "--provider", "offline"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Session)));
        assert_eq!(cli.identity.provider.as_deref(), Some("offline"));
    }

    #[test]
    fn test_email_requires_signed_in() {
        assert!(Cli::try_parse_from(["vaultgate", "--email", "a@b.com"]).is_err());
    }
}
