use std::time::Duration;

use sparta_domain::SpartaError;
use tracing::{info, warn};

/// Log the outcome of a driver command with structured fields.
///
/// `command` is the command keyword only, never its arguments.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, result: Result<(), &SpartaError>) {
    let duration_ms = elapsed.as_millis() as u64;

    match result {
        Ok(()) => info!(command, duration_ms, "command_execution_success"),
        Err(err) => warn!(
            command,
            duration_ms,
            error_type = error_label(err),
            error = %err,
            "command_execution_failure"
        ),
    }
}

/// Convert a `SpartaError` into a stable label suitable for logging.
#[inline]
#[must_use]
pub fn error_label(error: &SpartaError) -> &'static str {
    error.label()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_domain_error() {
        assert_eq!(error_label(&SpartaError::InvalidInput("x".into())), "invalid_input");
        assert_eq!(error_label(&SpartaError::Storage("x".into())), "storage");
    }
}
