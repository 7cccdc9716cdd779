//! Logs endpoint

use crate::BackendClient;
use crate::error::Result;
use forwarder_core::dto::logs::LogsResponse;

impl BackendClient {
    /// Fetch the backend's full log history
    ///
    /// # Returns
    /// Every log line the backend holds, in the backend's order
    pub async fn fetch_logs(&self) -> Result<LogsResponse> {
        let url = format!("{}/logs", self.base_url);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }
}
