//! SQLite database access

pub mod manager;

pub use manager::{DbManager, SqliteConnection};
