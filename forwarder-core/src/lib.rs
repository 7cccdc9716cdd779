//! Forwarder Core
//!
//! Core types and abstractions for the forwarder control panel.
//!
//! This crate contains:
//! - Domain types: Session parameters and the display buffer
//! - DTOs: Request and response bodies exchanged with the backend

pub mod domain;
pub mod dto;
