//! Line commands for the `sparta` binary.
//!
//! `parse` turns input lines into [`Command`]s and the [`Driver`] applies them
//! to whichever screen is active.

pub mod driver;
pub mod parse;

pub use driver::{Driver, Reply};
pub use parse::{parse, Command, CommandError, HELP};
