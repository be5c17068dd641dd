//! Display formatting for clocks and titles

/// Elapsed session time as `mm:ss`. Minutes keep growing past 99.
///
/// ```
/// use sparta_domain::utils::format::format_elapsed;
///
/// assert_eq!(format_elapsed(65), "01:05");
/// ```
#[must_use]
pub fn format_elapsed(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Rest countdown as `m:ss`.
///
/// ```
/// use sparta_domain::utils::format::format_countdown;
///
/// assert_eq!(format_countdown(90), "1:30");
/// ```
#[must_use]
pub fn format_countdown(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Exercise name as shown in the title block: whitespace runs collapsed,
/// upper-cased.
#[must_use]
pub fn display_exercise_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ").to_uppercase()
}
