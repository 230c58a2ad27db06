//! backdrop CLI: forwards desktop input to interactive wallpapers.

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{reload, EnvFilter, Registry};

mod check;
mod run;
#[cfg(any(test, feature = "simulate"))]
#[cfg_attr(not(feature = "simulate"), allow(dead_code))]
mod simulate;

#[derive(Parser)]
#[command(
    name = "backdrop",
    about = "Forward desktop mouse and keyboard input to wallpaper windows",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Capture input and forward it to the configured wallpapers.
    Run {
        /// Path to configuration file.
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Replay a script of raw input notifications against the configured
    /// static layout and print the messages that would be posted.
    #[cfg(feature = "simulate")]
    Simulate {
        /// Path to the TOML script.
        #[arg(short, long)]
        script: String,

        /// Path to configuration file.
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Validate the configuration and show which surfaces accept input.
    CheckConfig {
        /// Path to configuration file.
        #[arg(short, long)]
        config: Option<String>,
    },
}

impl Commands {
    fn config_path(&self) -> Option<&str> {
        match self {
            Self::Run { config } | Self::CheckConfig { config } => config.as_deref(),
            #[cfg(feature = "simulate")]
            Self::Simulate { config, .. } => config.as_deref(),
        }
    }
}

type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// `RUST_LOG` when set, otherwise the configured level.
fn filter_directives(rust_log: Option<String>, configured: &str) -> String {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .unwrap_or_else(|| configured.to_string())
}

/// Install the subscriber at `info` so config loading is logged; the
/// configured level is applied afterwards through the returned handle.
fn init_logging() -> FilterHandle {
    let initial = filter_directives(std::env::var(EnvFilter::DEFAULT_ENV).ok(), "info");
    let (filter, handle) = reload::Layer::new(EnvFilter::new(initial));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
    handle
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let filter = init_logging();
    let config = backdrop_forward::setup::load_config(cli.command.config_path())?;
    filter.reload(EnvFilter::new(filter_directives(
        std::env::var(EnvFilter::DEFAULT_ENV).ok(),
        &config.general.log_level,
    )))?;

    match cli.command {
        Commands::Run { .. } => {
            tracing::info!(mode = %config.capture.mode, "starting input forwarding");
            run::run(config).await
        }
        #[cfg(feature = "simulate")]
        Commands::Simulate { script, .. } => simulate::run(&config, &script),
        Commands::CheckConfig { .. } => {
            check::print_summary(&config);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rust_log_overrides_configured_level() {
        assert_eq!(
            filter_directives(Some("backdrop_forward=trace".to_string()), "warn"),
            "backdrop_forward=trace"
        );
    }

    #[test]
    fn configured_level_used_without_rust_log() {
        assert_eq!(filter_directives(None, "debug"), "debug");
        assert_eq!(filter_directives(Some("  ".to_string()), "debug"), "debug");
    }

    #[test]
    fn check_config_parses_without_simulation() {
        let cli = Cli::try_parse_from(["backdrop", "check-config", "--config", "c.toml"]).unwrap();
        assert_eq!(cli.command.config_path(), Some("c.toml"));
    }
}
