//! Panel service
//!
//! Owns the display buffer and implements the two user-visible operations:
//! - `start`: validate the chat IDs, ask the backend to start forwarding,
//!   append the outcome
//! - `fetch_logs`: pull the backend's log history and replace the view
//!
//! Every backend failure is turned into a single `Error: ...` line here and
//! goes no further.

use forwarder_client::{Backend, ClientError};
use forwarder_core::domain::session::{SessionParams, ValidationError};
use forwarder_core::domain::view::LogView;
use forwarder_core::dto::start::StartRequest;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::watch;
use tracing::{debug, error, info};

use crate::service::Notifier;

/// Status line appended before the start request goes out
pub const STARTING_LINE: &str = "Starting bot...";

/// The control panel: backend, display buffer and notifier
pub struct Panel {
    backend: Arc<dyn Backend>,
    notifier: Arc<dyn Notifier>,
    view: Mutex<LogView>,
    /// Bumped after every display change
    revision: watch::Sender<u64>,
    /// Dispatch order of log fetches
    next_seq: AtomicU64,
}

impl Panel {
    /// Creates a panel with an empty display of `viewport` lines
    pub fn new(backend: Arc<dyn Backend>, notifier: Arc<dyn Notifier>, viewport: usize) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            backend,
            notifier,
            view: Mutex::new(LogView::new(viewport)),
            revision,
            next_seq: AtomicU64::new(0),
        }
    }

    /// Receiver that changes whenever the display does
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    /// Copy of the current display buffer
    pub fn view(&self) -> LogView {
        self.view.lock().unwrap().clone()
    }

    /// Starts a forwarding session
    ///
    /// Invalid input raises a blocking notification and returns the
    /// validation error without touching the network. Otherwise exactly one
    /// start request is sent and its outcome is appended to the display.
    pub async fn start(&self, source: &str, target: &str) -> Result<(), ValidationError> {
        let params = match SessionParams::new(source, target) {
            Ok(params) => params,
            Err(e) => {
                self.notifier.alert(&e.to_string());
                return Err(e);
            }
        };

        self.append(STARTING_LINE);

        match self.backend.start(&StartRequest::from(&params)).await {
            Ok(resp) => {
                info!(
                    "Start accepted (source: {}, target: {})",
                    params.source(),
                    params.target()
                );
                self.append(&resp.message);
            }
            Err(e) => self.report_failure("starting bot", &e),
        }

        Ok(())
    }

    /// Fetches the backend's logs and replaces the display with them
    ///
    /// A response that arrives after a newer fetch has already been applied
    /// is discarded.
    pub async fn fetch_logs(&self) {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);

        match self.backend.fetch_logs().await {
            Ok(resp) => {
                let (applied, current) = {
                    let mut view = self.view.lock().unwrap();
                    let applied = view.replace_snapshot(seq, &resp.logs);
                    (applied, view.last_snapshot())
                };
                if applied {
                    debug!("Applied log snapshot {} ({} lines)", seq, resp.logs.len());
                    self.notify_changed();
                } else {
                    debug!("Dropped stale log snapshot {} (showing {:?})", seq, current);
                }
            }
            Err(e) => self.report_failure("fetching logs", &e),
        }
    }

    /// Traces the failure and appends its `Error:` line
    fn report_failure(&self, action: &str, e: &ClientError) {
        error!(status = ?e.status_code(), "Error {}: {}", action, e);
        if let ClientError::Status { body, .. } = e {
            debug!("Response body: {}", body);
        }
        self.append(&format!("Error: {}", e));
    }

    fn append(&self, line: &str) {
        self.view.lock().unwrap().append_line(line);
        self.notify_changed();
    }

    fn notify_changed(&self) {
        self.revision.send_modify(|rev| *rev += 1);
    }
}
