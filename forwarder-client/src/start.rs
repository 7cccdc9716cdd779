//! Start endpoint

use crate::BackendClient;
use crate::error::Result;
use forwarder_core::dto::start::{StartRequest, StartResponse};

impl BackendClient {
    /// Ask the backend to start forwarding
    ///
    /// Sends exactly one `POST /start` with a JSON body. No retry is
    /// attempted on failure.
    ///
    /// # Example
    /// ```no_run
    /// # use forwarder_client::BackendClient;
    /// # use forwarder_core::domain::session::SessionParams;
    /// # use forwarder_core::dto::start::StartRequest;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = BackendClient::new("http://localhost:5000");
    /// let params = SessionParams::new("-1001", "-1002")?;
    /// let resp = client.start_session(&StartRequest::from(&params)).await?;
    /// println!("{}", resp.message);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn start_session(&self, req: &StartRequest) -> Result<StartResponse> {
        let url = format!("{}/start", self.base_url);
        let response = self.client.post(&url).json(req).send().await?;

        self.handle_response(response).await
    }
}
