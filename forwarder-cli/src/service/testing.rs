//! In-memory fakes for service and scheduler tests

use async_trait::async_trait;
use forwarder_client::{Backend, Result};
use forwarder_core::dto::logs::LogsResponse;
use forwarder_core::dto::start::{StartRequest, StartResponse};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use crate::service::Notifier;

type Scripted<T> = VecDeque<(Result<T>, Duration)>;

/// Backend answering from scripted queues
///
/// When a queue is empty the fake answers successfully: `"ok"` for start,
/// an empty log list for logs, after `default_logs_delay`.
#[derive(Default)]
pub struct FakeBackend {
    start_replies: Mutex<Scripted<String>>,
    logs_replies: Mutex<Scripted<LogsResponse>>,
    start_calls: Mutex<Vec<StartRequest>>,
    logs_calls: Mutex<usize>,
    default_logs_delay: Mutex<Duration>,
}

impl FakeBackend {
    pub fn push_start(&self, reply: Result<String>) {
        self.push_start_delayed(reply, Duration::ZERO);
    }

    pub fn push_start_delayed(&self, reply: Result<String>, delay: Duration) {
        self.start_replies.lock().unwrap().push_back((reply, delay));
    }

    pub fn push_logs(&self, reply: Result<LogsResponse>) {
        self.push_logs_delayed(reply, Duration::ZERO);
    }

    pub fn push_logs_delayed(&self, reply: Result<LogsResponse>, delay: Duration) {
        self.logs_replies.lock().unwrap().push_back((reply, delay));
    }

    pub fn set_logs_delay(&self, delay: Duration) {
        *self.default_logs_delay.lock().unwrap() = delay;
    }

    pub fn start_calls(&self) -> Vec<StartRequest> {
        self.start_calls.lock().unwrap().clone()
    }

    /// Number of fetches that have reached the backend
    pub fn logs_calls(&self) -> usize {
        *self.logs_calls.lock().unwrap()
    }
}

#[async_trait]
impl Backend for FakeBackend {
    async fn start(&self, req: &StartRequest) -> Result<StartResponse> {
        self.start_calls.lock().unwrap().push(req.clone());
        let (reply, delay) = self
            .start_replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| (Ok("ok".to_string()), Duration::ZERO));

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        reply.map(|message| StartResponse { message })
    }

    async fn fetch_logs(&self) -> Result<LogsResponse> {
        *self.logs_calls.lock().unwrap() += 1;
        let (reply, delay) = {
            let scripted = self.logs_replies.lock().unwrap().pop_front();
            scripted.unwrap_or_else(|| {
                (
                    Ok(LogsResponse::default()),
                    *self.default_logs_delay.lock().unwrap(),
                )
            })
        };

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        reply
    }
}

/// Notifier that records every alert
#[derive(Default)]
pub struct RecordingNotifier {
    alerts: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}
