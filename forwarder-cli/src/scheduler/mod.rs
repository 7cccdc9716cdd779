//! Scheduler layer for the panel
//!
//! Owns the recurring log fetch. The poller is created when the panel comes
//! up and lives until its handle is shut down or dropped.

pub mod poller;

pub use poller::LogPoller;
