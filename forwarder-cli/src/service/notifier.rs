//! Blocking user notifications

use colored::*;
use std::io::Write;

/// Synchronous user-facing alert
///
/// `alert` must not return before the message has reached the user.
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

/// Writes alerts to stderr and flushes before returning
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn alert(&self, message: &str) {
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "{} {}", "⚠".yellow().bold(), message.yellow());
        let _ = stderr.flush();
    }
}
