mod commands;
mod launchers;
mod request_file;
mod request_model;

use anyhow::Context;
use clap::Parser;
use gmlink_core::{parse_callback_url, FallbackStrategy, ResolverConfig};
use gmlink_launch::{AppLauncher, LaunchResolver};
use tracing_subscriber::EnvFilter;

use crate::commands::{run_command, Commands};
use crate::launchers::{DryRunLauncher, InstalledApp, SystemLauncher};

#[derive(Debug, Parser)]
#[command(name = "gmlink-cli")]
#[command(about = "Open maps, Street View and directions in Google Maps, with fallbacks")]
struct Cli {
    /// URL Google Maps or Chrome should return to [env: GMLINK_CALLBACK_URL]
    #[arg(long, global = true)]
    callback_url: Option<String>,

    /// What to open when Google Maps is missing [env: GMLINK_FALLBACK]
    #[arg(long, global = true)]
    fallback: Option<FallbackStrategy>,

    /// Name shown by the target app's "back" button [env: GMLINK_APP_NAME]
    #[arg(long, global = true)]
    app_name: Option<String>,

    /// Print URLs instead of opening them
    #[arg(long, global = true)]
    dry_run: bool,

    /// Apps to treat as installed during a dry run (comma-separated)
    #[arg(long, global = true, value_enum, value_delimiter = ',', requires = "dry_run")]
    installed: Vec<InstalledApp>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Apply command-line overrides on top of the environment configuration.
    fn resolver_config(&self, mut config: ResolverConfig) -> anyhow::Result<ResolverConfig> {
        if let Some(raw) = &self.callback_url {
            let url = parse_callback_url(raw)
                .map_err(|reason| anyhow::anyhow!("invalid --callback-url: {reason}"))?;
            config.callback_url = Some(url);
        }
        if let Some(strategy) = self.fallback {
            config.fallback_strategy = strategy;
        }
        if let Some(app_name) = &self.app_name {
            config.app_name.clone_from(app_name);
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let config = gmlink_core::load_app_config().context("failed to load configuration")?;

    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let resolver_config = cli.resolver_config(config.resolver)?;
    tracing::debug!(
        fallback = %resolver_config.fallback_strategy,
        has_callback_url = resolver_config.callback_url.is_some(),
        dry_run = cli.dry_run,
        "resolved configuration"
    );

    let launcher: Box<dyn AppLauncher> = if cli.dry_run {
        Box::new(DryRunLauncher::new(&cli.installed))
    } else {
        Box::new(SystemLauncher)
    };

    let resolver = LaunchResolver::new(launcher, resolver_config);
    run_command(cli.command, &resolver)
}
