//! Line-oriented command grammar for the `sparta` driver.
//!
//! Set numbers are 1-based on the command line and converted to indices here.

use sparta_core::workout::view::SessionIntent;
use sparta_domain::constants::{REPS_STEP, WEIGHT_STEP};
use sparta_domain::SetField;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Show,
    Json,
    Quit,
    // Overview
    Toggle(String),
    Swap { original: String, replacement: String },
    Start(Option<usize>),
    // Session
    Done(usize),
    Field { index: usize, field: SetField, value: String },
    StepWeight { index: usize, delta: f64 },
    StepReps { index: usize, delta: i64 },
    Skip,
    Next,
    Back,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("missing {what} for `{command}`")]
    MissingArgument { command: &'static str, what: &'static str },

    #[error("invalid number: {0}")]
    InvalidNumber(String),
}

impl Command {
    /// Keyword used in logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Show => "show",
            Self::Json => "json",
            Self::Quit => "quit",
            Self::Toggle(_) => "toggle",
            Self::Swap { .. } => "swap",
            Self::Start(_) => "start",
            Self::Done(_) => "done",
            Self::Field { field: SetField::Weight, .. } => "weight",
            Self::Field { field: SetField::Reps, .. } => "reps",
            Self::StepWeight { .. } => "step_weight",
            Self::StepReps { .. } => "step_reps",
            Self::Skip => "skip",
            Self::Next => "next",
            Self::Back => "back",
        }
    }

    /// The session intent this command maps to, if it is a session command.
    /// `back` is handled by the driver because it consumes the session.
    #[must_use]
    pub fn to_intent(&self) -> Option<SessionIntent> {
        let intent = match self {
            Self::Done(index) => SessionIntent::MarkSetDone(*index),
            Self::Field { index, field, value } => {
                SessionIntent::UpdateField { index: *index, field: *field, value: value.clone() }
            }
            Self::StepWeight { index, delta } => {
                SessionIntent::StepWeight { index: *index, delta: *delta }
            }
            Self::StepReps { index, delta } => {
                SessionIntent::StepReps { index: *index, delta: *delta }
            }
            Self::Skip => SessionIntent::SkipRest,
            Self::Next => SessionIntent::Advance,
            _ => return None,
        };
        Some(intent)
    }
}

pub const HELP: &str = "\
overview: show | json | toggle <exercise-id> | swap <exercise-id> <replacement-id> | start [n]
session:  show | json | done <set> | weight <set> <kg> | reps <set> <n>
          +w <set> | -w <set> | +r <set> | -r <set> | skip | next | back
always:   help | quit";

fn set_index(command: &'static str, arg: Option<&str>) -> Result<usize, CommandError> {
    let raw = arg.ok_or(CommandError::MissingArgument { command, what: "set number" })?;
    match raw.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(CommandError::InvalidNumber(raw.to_string())),
    }
}

fn required<'a>(
    command: &'static str,
    what: &'static str,
    arg: Option<&'a str>,
) -> Result<&'a str, CommandError> {
    arg.ok_or(CommandError::MissingArgument { command, what })
}

/// Parse one input line.
pub fn parse(line: &str) -> Result<Command, CommandError> {
    let mut parts = line.split_whitespace();
    let keyword = parts.next().ok_or(CommandError::Empty)?;
    let first = parts.next();
    let second = parts.next();

    let command = match keyword.to_ascii_lowercase().as_str() {
        "help" | "?" => Command::Help,
        "show" | "ls" => Command::Show,
        "json" => Command::Json,
        "quit" | "exit" | "q" => Command::Quit,
        "toggle" => Command::Toggle(required("toggle", "exercise id", first)?.to_string()),
        "swap" => Command::Swap {
            original: required("swap", "exercise id", first)?.to_string(),
            replacement: required("swap", "replacement id", second)?.to_string(),
        },
        "start" => match first {
            None => Command::Start(None),
            Some(_) => Command::Start(Some(set_index("start", first)?)),
        },
        "done" => Command::Done(set_index("done", first)?),
        "weight" => Command::Field {
            index: set_index("weight", first)?,
            field: SetField::Weight,
            value: required("weight", "value", second)?.to_string(),
        },
        "reps" => Command::Field {
            index: set_index("reps", first)?,
            field: SetField::Reps,
            value: required("reps", "value", second)?.to_string(),
        },
        "+w" => Command::StepWeight { index: set_index("+w", first)?, delta: WEIGHT_STEP },
        "-w" => Command::StepWeight { index: set_index("-w", first)?, delta: -WEIGHT_STEP },
        "+r" => Command::StepReps { index: set_index("+r", first)?, delta: REPS_STEP },
        "-r" => Command::StepReps { index: set_index("-r", first)?, delta: -REPS_STEP },
        "skip" => Command::Skip,
        "next" | "finish" => Command::Next,
        "back" => Command::Back,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(command)
}
