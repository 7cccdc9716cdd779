//! Log poller
//!
//! Fetches logs immediately, then once per interval, with no jitter and no
//! backoff. Each tick starts an independent fetch, so a slow backend can have
//! several fetches outstanding at once unless single-flight is enabled.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::oneshot;
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::{self, Duration, Interval, MissedTickBehavior};
use tracing::{debug, info};

use crate::config::Config;
use crate::service::Panel;

/// Recurring log fetcher bound to a panel
pub struct LogPoller {
    panel: Arc<Panel>,
    interval: Duration,
    single_flight: bool,
}

/// Owned handle to a running poller
///
/// Dropping the handle stops the poller as well; `shutdown` additionally
/// waits for it to finish.
pub struct PollerHandle {
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl LogPoller {
    /// Creates a new log poller
    pub fn new(panel: Arc<Panel>, config: &Config) -> Self {
        Self {
            panel,
            interval: config.poll_interval,
            single_flight: config.single_flight,
        }
    }

    /// Starts the polling loop on the current runtime
    pub fn spawn(self) -> PollerHandle {
        let (shutdown, shutdown_rx) = oneshot::channel();
        let task = tokio::spawn(self.run(shutdown_rx));
        PollerHandle { shutdown, task }
    }

    async fn run(self, mut shutdown: oneshot::Receiver<()>) {
        info!(
            "Starting log poller (interval: {:?}, single-flight: {})",
            self.interval, self.single_flight
        );

        let mut ticker = ticker(self.interval);
        let in_flight = Arc::new(AtomicBool::new(false));
        let mut polls = JoinSet::new();

        loop {
            tokio::select! {
                _ = &mut shutdown => break,
                _ = ticker.tick() => {
                    while polls.try_join_next().is_some() {}

                    if self.single_flight && in_flight.swap(true, Ordering::AcqRel) {
                        debug!("Previous log fetch still running, skipping tick");
                        continue;
                    }

                    debug!("Polling for logs ({} outstanding)", polls.len());

                    let panel = Arc::clone(&self.panel);
                    let in_flight = Arc::clone(&in_flight);
                    polls.spawn(async move {
                        panel.fetch_logs().await;
                        in_flight.store(false, Ordering::Release);
                    });
                }
            }
        }

        polls.abort_all();
        info!("Log poller stopped");
    }
}

/// Fixed-period ticker whose first tick completes immediately
///
/// A late tick shifts the schedule instead of firing catch-up ticks.
fn ticker(period: Duration) -> Interval {
    let mut ticker = time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}

impl PollerHandle {
    /// Stops the timer, aborts outstanding fetches and waits for the loop to exit
    pub async fn shutdown(self) {
        let _ = self.shutdown.send(());
        let _ = self.task.await;
    }
}
