//! # Sparta Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - Draft storage adapters (JSON file, SQLite, in-memory)
//! - The configuration loader
//! - Local identity, navigation and haptics collaborators
//! - Tracing setup
//!
//! ## Architecture
//! - Implements traits defined in `sparta-core`
//! - Contains all "impure" code (filesystem, database, process environment)

pub mod config;
pub mod database;
pub mod errors;
pub mod observability;
pub mod platform;
pub mod services;
pub mod storage;

// Re-export commonly used items
pub use database::DbManager;
pub use errors::InfraError;
pub use platform::LogHaptics;
pub use services::{LocalIdentityProvider, LoggingNavigator};
pub use storage::{
    build_storage, FileWorkoutStorage, InMemoryWorkoutStorage, SqliteWorkoutStorage,
};
