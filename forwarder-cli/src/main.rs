//! Forwarder CLI
//!
//! Terminal control panel for the message forwarder backend.
//!
//! Architecture:
//! - Configuration: Build-time backend origin, overridable from flags or env
//! - Services: The panel (start, fetch logs, display buffer, notifications)
//! - Scheduler: Recurring log poller owned by the panel command
//! - Commands: One-shot `start` / `logs` and the interactive `panel`

mod commands;
mod config;
mod render;
mod scheduler;
mod service;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use std::process::ExitCode;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "forwarder")]
#[command(about = "Control panel for the message forwarder", long_about = None)]
struct Cli {
    /// Backend URL
    #[arg(long, env = "FORWARDER_BACKEND_URL", default_value = config::DEFAULT_BACKEND_URL)]
    backend_url: String,

    /// Seconds between two log fetches
    #[arg(long, env = "POLL_INTERVAL", default_value_t = 5)]
    poll_interval: u64,

    /// Number of log lines shown at once
    #[arg(long, env = "VIEWPORT_LINES", default_value_t = forwarder_core::domain::view::DEFAULT_VIEWPORT)]
    viewport_lines: usize,

    /// Skip a poll while the previous one is still running
    #[arg(long, env = "SINGLE_FLIGHT")]
    single_flight: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Logs go to stderr so they do not interleave with the rendered panel
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "forwarder_cli=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = Config::new(cli.backend_url);
    config.poll_interval = Duration::from_secs(cli.poll_interval);
    config.viewport_lines = cli.viewport_lines;
    config.single_flight = cli.single_flight;
    config.validate()?;

    info!("Using backend {}", config.backend_url);

    handle_command(cli.command, &config).await
}
