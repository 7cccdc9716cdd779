//! Service layer
//!
//! The panel's behaviour: starting a forwarding session, fetching logs into
//! the display buffer, and notifying the user of invalid input. Collaborators
//! are trait objects so tests can substitute fakes.

mod notifier;
mod panel;

#[cfg(test)]
pub(crate) mod testing;

pub use notifier::{Notifier, TerminalNotifier};
pub use panel::Panel;
