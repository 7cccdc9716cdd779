//! Forwarder HTTP Client
//!
//! A small, type-safe HTTP client for the forwarder backend. The backend
//! exposes two endpoints:
//! - `POST /start` with `{"source", "target"}`, answering `{"message"}`
//! - `GET /logs`, answering `{"logs": [...]}`
//!
//! # Example
//!
//! ```no_run
//! use forwarder_client::BackendClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = BackendClient::new("http://localhost:5000");
//!
//!     let logs = client.fetch_logs().await?;
//!     println!("{}", logs.logs.join("\n"));
//!     Ok(())
//! }
//! ```

pub mod error;
mod logs;
mod start;

// Re-export commonly used types
pub use error::{ClientError, Result};

use async_trait::async_trait;
use forwarder_core::dto::logs::LogsResponse;
use forwarder_core::dto::start::{StartRequest, StartResponse};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Backend operations the panel depends on
///
/// Implemented by [`BackendClient`] over HTTP; tests substitute in-memory
/// fakes.
#[async_trait]
pub trait Backend: Send + Sync {
    /// `POST /start`
    async fn start(&self, req: &StartRequest) -> Result<StartResponse>;

    /// `GET /logs`
    async fn fetch_logs(&self) -> Result<LogsResponse>;
}

/// HTTP client for the forwarder backend
#[derive(Debug, Clone)]
pub struct BackendClient {
    /// Base URL of the backend (e.g., "https://forwarder-bot-1.onrender.com")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl BackendClient {
    /// Create a new backend client
    ///
    /// # Arguments
    /// * `base_url` - The backend origin; a trailing slash is dropped
    ///
    /// # Example
    /// ```
    /// use forwarder_client::BackendClient;
    ///
    /// let client = BackendClient::new("http://localhost:5000/");
    /// assert_eq!(client.base_url(), "http://localhost:5000");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new backend client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the backend
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Check the status code and decode the JSON body
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::status(status.as_u16(), body));
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

#[async_trait]
impl Backend for BackendClient {
    async fn start(&self, req: &StartRequest) -> Result<StartResponse> {
        self.start_session(req).await
    }

    async fn fetch_logs(&self) -> Result<LogsResponse> {
        BackendClient::fetch_logs(self).await
    }
}
