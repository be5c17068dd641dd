//! # Sparta Domain
//!
//! Business domain types and models for the Sparta workout runtime.
//!
//! This crate contains:
//! - Workout, exercise and session data types
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants and the demo workout
//!
//! ## Architecture
//! - No dependencies on other Sparta crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod demo;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use demo::demo_workout;
pub use errors::*;
pub use types::*;
