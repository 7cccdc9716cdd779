//! Start command handler

use anyhow::Result;
use std::process::ExitCode;

use crate::render::print_view;
use crate::service::Panel;

/// Issue one start request and print the resulting display
///
/// Blank chat IDs exit with a failure code once the user has been alerted;
/// the alert is the only message shown.
pub async fn handle_start(panel: &Panel, source: &str, target: &str) -> Result<ExitCode> {
    if panel.start(source, target).await.is_err() {
        return Ok(ExitCode::FAILURE);
    }

    print_view(&panel.view());
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::testing::{FakeBackend, RecordingNotifier};
    use std::sync::Arc;

    fn same_code(a: ExitCode, b: ExitCode) -> bool {
        format!("{:?}", a) == format!("{:?}", b)
    }

    #[tokio::test]
    async fn test_blank_ids_fail_after_single_alert() {
        let backend = Arc::new(FakeBackend::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let panel = Panel::new(backend.clone(), notifier.clone(), 20);

        let code = handle_start(&panel, "  ", "-1002").await.unwrap();

        assert!(same_code(code, ExitCode::FAILURE));
        assert_eq!(notifier.alerts().len(), 1);
        assert!(backend.start_calls().is_empty());
    }

    #[tokio::test]
    async fn test_valid_ids_succeed() {
        let backend = Arc::new(FakeBackend::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let panel = Panel::new(backend.clone(), notifier.clone(), 20);

        let code = handle_start(&panel, "-1001", "-1002").await.unwrap();

        assert!(same_code(code, ExitCode::SUCCESS));
        assert_eq!(backend.start_calls().len(), 1);
        assert!(notifier.alerts().is_empty());
    }
}
