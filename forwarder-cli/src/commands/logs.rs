//! Logs command handler

use anyhow::Result;

use crate::render::print_view;
use crate::service::Panel;

/// Fetch the logs once and print them
pub async fn handle_logs(panel: &Panel) -> Result<()> {
    panel.fetch_logs().await;
    print_view(&panel.view());
    Ok(())
}
