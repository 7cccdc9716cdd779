//! Interactive panel
//!
//! Keeps the log poller running, re-renders the display on every change and
//! reads `start` / `logs` / `quit` commands from stdin until quit, EOF or
//! Ctrl-C.

use anyhow::{Context, Result};
use colored::*;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::task::{JoinHandle, JoinSet};
use tracing::{debug, info};

use crate::config::Config;
use crate::render::{print_prompt, print_view};
use crate::scheduler::LogPoller;
use crate::service::Panel;

/// A line typed into the panel
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Start { source: String, target: String },
    Logs,
    Quit,
    Empty,
    Unknown(String),
}

/// Parses one stdin line
///
/// Missing `start` arguments are kept as empty strings so they go through
/// the same validation as a blank form.
fn parse_input(line: &str) -> Input {
    let mut words = line.split_whitespace();

    match words.next() {
        None => Input::Empty,
        Some("start") => Input::Start {
            source: words.next().unwrap_or_default().to_string(),
            target: words.next().unwrap_or_default().to_string(),
        },
        Some("logs") => Input::Logs,
        Some("quit") | Some("exit") => Input::Quit,
        Some(other) => Input::Unknown(other.to_string()),
    }
}

/// Run the panel until the user leaves
pub async fn handle_panel(
    panel: Arc<Panel>,
    config: &Config,
    initial: Option<(String, String)>,
) -> Result<()> {
    info!("Panel connected to {}", config.backend_url);

    let renderer = spawn_renderer(Arc::clone(&panel));
    let poller = LogPoller::new(Arc::clone(&panel), config).spawn();

    print_prompt();

    let stdin = BufReader::new(tokio::io::stdin());
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };
    let result = run_input_loop(Arc::clone(&panel), stdin, initial, ctrl_c).await;

    poller.shutdown().await;
    renderer.abort();
    info!("Panel closed");

    result
}

/// Reads commands from `input` until quit, EOF or `shutdown` resolves
///
/// Start and logs requests run as tasks so a hung backend never stops the
/// loop from reading input. Requests still outstanding on exit are aborted.
async fn run_input_loop<R, S>(
    panel: Arc<Panel>,
    input: R,
    initial: Option<(String, String)>,
    shutdown: S,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    S: Future<Output = ()>,
{
    let mut requests = JoinSet::new();
    let mut lines = input.lines();

    // Created once so a signal arriving between iterations is not lost.
    tokio::pin!(shutdown);

    if let Some((source, target)) = initial {
        spawn_start(&mut requests, &panel, source, target);
    }

    let result = loop {
        tokio::select! {
            _ = &mut shutdown => break Ok(()),
            line = lines.next_line() => {
                while requests.try_join_next().is_some() {}

                let line = match line.context("Failed to read from stdin") {
                    Ok(Some(line)) => line,
                    Ok(None) => break Ok(()),
                    Err(e) => break Err(e),
                };

                match parse_input(&line) {
                    Input::Start { source, target } => {
                        spawn_start(&mut requests, &panel, source, target);
                    }
                    Input::Logs => {
                        let panel = Arc::clone(&panel);
                        requests.spawn(async move { panel.fetch_logs().await });
                    }
                    Input::Quit => break Ok(()),
                    Input::Empty => {}
                    Input::Unknown(cmd) => {
                        eprintln!("{}", format!("Unknown command: {}", cmd).yellow());
                        print_prompt();
                    }
                }
            }
        }
    };

    if !requests.is_empty() {
        debug!("Aborting {} outstanding request(s)", requests.len());
    }
    requests.abort_all();

    result
}

fn spawn_start(requests: &mut JoinSet<()>, panel: &Arc<Panel>, source: String, target: String) {
    let panel = Arc::clone(panel);
    requests.spawn(async move {
        // Validation failures were already shown to the user.
        let _ = panel.start(&source, &target).await;
    });
}

/// Re-renders the display whenever the panel reports a change
fn spawn_renderer(panel: Arc<Panel>) -> JoinHandle<()> {
    let mut changes = panel.subscribe();

    tokio::spawn(async move {
        while changes.changed().await.is_ok() {
            print_view(&panel.view());
            print_prompt();
        }
    })
}
