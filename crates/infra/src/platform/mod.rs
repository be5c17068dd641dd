//! Device integrations

pub mod haptics;

pub use haptics::LogHaptics;
