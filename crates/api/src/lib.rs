//! # Sparta App
//!
//! Application layer - line commands and the main entry point.
//!
//! This crate contains:
//! - Line commands (terminal → session bridge)
//! - Application context (dependency injection)
//! - Main entry point and setup
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Drives the overview and active workout screens from stdin

pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::{Command, Driver, Reply};
pub use context::*;
