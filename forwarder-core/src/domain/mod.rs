//! Core domain types
//!
//! This module contains the structures shared between the HTTP client and
//! the panel: validated session parameters and the display buffer the panel
//! renders.

pub mod session;
pub mod view;
