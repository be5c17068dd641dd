//! Logging setup
//!
//! Installs a `tracing-subscriber` formatter filtered by `SPARTA_LOG`
//! (falling back to `info`). JSON output is selected with
//! `SPARTA_LOG_FORMAT=json`.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "SPARTA_LOG";
pub const LOG_FORMAT_ENV_VAR: &str = "SPARTA_LOG_FORMAT";
const DEFAULT_DIRECTIVE: &str = "info";

/// Build the filter from `SPARTA_LOG`, or `info` when unset or invalid.
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global subscriber. Returns `false` if one was already set.
pub fn init_tracing() -> bool {
    let json = std::env::var(LOG_FORMAT_ENV_VAR).is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter()).with_writer(std::io::stderr);

    let result = if json { builder.json().try_init() } else { builder.try_init() };
    result.is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_reports_existing_subscriber() {
        let _ = init_tracing();
        assert!(!init_tracing());
    }
}
