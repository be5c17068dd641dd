//! Local implementations of the session collaborator ports.
//!
//! These back the command-line driver and tests. A real client would wire
//! its own identity and routing layers instead.

pub mod identity;
pub mod navigation;

pub use identity::LocalIdentityProvider;
pub use navigation::LoggingNavigator;
