//! Pure string helpers for the set log's free-text cells.

/// Sanitize a weight cell: commas become periods, only digits and a single
/// decimal separator survive. Separators after the first are dropped.
///
/// # Examples
///
/// ```
/// use sparta_domain::utils::input::sanitize_weight;
///
/// assert_eq!(sanitize_weight("12,5kg"), "12.5");
/// assert_eq!(sanitize_weight("1.2.5"), "1.25");
/// ```
#[must_use]
pub fn sanitize_weight(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut seen_separator = false;

    for ch in raw.chars() {
        match ch {
            '0'..='9' => out.push(ch),
            '.' | ',' if !seen_separator => {
                out.push('.');
                seen_separator = true;
            }
            _ => {}
        }
    }

    out
}

/// Sanitize a reps cell: digits only.
///
/// ```
/// use sparta_domain::utils::input::sanitize_reps;
///
/// assert_eq!(sanitize_reps("12a"), "12");
/// ```
#[must_use]
pub fn sanitize_reps(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Parse the leading numeric part of a cell, `0.0` when there is none.
#[must_use]
pub fn parse_weight(value: &str) -> f64 {
    let prefix: String = sanitize_weight(value.trim());
    prefix.parse::<f64>().ok().filter(|n| n.is_finite()).unwrap_or(0.0)
}

/// Parse the leading integer part of a cell, `0` when there is none.
#[must_use]
pub fn parse_reps(value: &str) -> i64 {
    let digits: String = value.trim().chars().take_while(char::is_ascii_digit).collect();
    digits.parse::<i64>().unwrap_or(0)
}

/// Format a weight the way the stepper displays it: whole numbers without
/// a fraction, everything else with one decimal.
#[must_use]
pub fn format_weight(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_normalizes_comma() {
        assert_eq!(sanitize_weight("12,5kg"), "12.5");
        assert_eq!(sanitize_weight("80"), "80");
        assert_eq!(sanitize_weight(",5"), ".5");
    }

    #[test]
    fn weight_keeps_single_separator() {
        assert_eq!(sanitize_weight("1.2.3"), "1.23");
        assert_eq!(sanitize_weight("1,2.3"), "1.23");
        assert_eq!(sanitize_weight("abc"), "");
    }

    #[test]
    fn reps_keep_digits_only() {
        assert_eq!(sanitize_reps("12a"), "12");
        assert_eq!(sanitize_reps("1 0"), "10");
        assert_eq!(sanitize_reps("-3"), "3");
    }

    #[test]
    fn parse_treats_garbage_as_zero() {
        assert_eq!(parse_weight(""), 0.0);
        assert_eq!(parse_weight("."), 0.0);
        assert_eq!(parse_weight("12.5"), 12.5);
        assert_eq!(parse_weight("12."), 12.0);
        assert_eq!(parse_reps(""), 0);
        assert_eq!(parse_reps("x"), 0);
        assert_eq!(parse_reps("8"), 8);
    }

    #[test]
    fn format_drops_whole_fraction() {
        assert_eq!(format_weight(15.0), "15");
        assert_eq!(format_weight(12.5), "12.5");
        assert_eq!(format_weight(0.0), "0");
    }
}
