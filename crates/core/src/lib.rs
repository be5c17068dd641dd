//! # Sparta Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port interfaces (traits) for storage, identity, navigation and haptics
//! - The set log, session clocks and progression controller
//! - The workout overview service and screen view models
//!
//! ## Architecture Principles
//! - Only depends on `sparta-domain`
//! - No filesystem, database or platform code
//! - All external dependencies via traits

pub mod workout;

// Re-export specific items to avoid ambiguity
pub use workout::ports::{Haptics, IdentityProvider, Navigator, SessionDeps, WorkoutStorage};
pub use workout::{SessionScreen, WorkoutOverview, WorkoutSession};
