//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod logs;
mod panel;
mod start;

use anyhow::Result;
use clap::Subcommand;
use forwarder_client::BackendClient;
use std::process::ExitCode;
use std::sync::Arc;

use crate::config::Config;
use crate::service::{Panel, TerminalNotifier};

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start forwarding from a source chat to a target chat
    Start {
        /// Source chat ID
        #[arg(long, default_value = "")]
        source: String,
        /// Target chat ID
        #[arg(long, default_value = "")]
        target: String,
    },
    /// Fetch and print the backend's logs once
    Logs,
    /// Run the interactive panel with auto-refreshing logs
    Panel {
        /// Source chat ID to start with
        #[arg(long, requires = "target")]
        source: Option<String>,
        /// Target chat ID to start with
        #[arg(long, requires = "source")]
        target: Option<String>,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module. Failures the user
/// has already been shown map to a bare non-zero exit code.
pub async fn handle_command(command: Commands, config: &Config) -> Result<ExitCode> {
    let panel = Arc::new(build_panel(config));

    match command {
        Commands::Start { source, target } => start::handle_start(&panel, &source, &target).await,
        Commands::Logs => {
            logs::handle_logs(&panel).await?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Panel { source, target } => {
            let initial = source.zip(target);
            panel::handle_panel(panel, config, initial).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn build_panel(config: &Config) -> Panel {
    let client = BackendClient::new(config.backend_url.clone());
    Panel::new(
        Arc::new(client),
        Arc::new(TerminalNotifier),
        config.viewport_lines,
    )
}
