//! Pure string utilities shared by the session runtime and its views

pub mod format;
pub mod input;
