//! Free-text cadence parsing
//!
//! Users store their reminder cadence as plain text ("Daily", "Every 6
//! hours", ...). Anything we cannot parse means the profile is skipped for
//! the run, never errored: settings are user-entered and a bad value is not
//! the dispatcher's problem to reject.

use regex::Regex;
use std::sync::OnceLock;

static HOURS_PATTERN: OnceLock<Regex> = OnceLock::new();

fn hours_pattern() -> &'static Regex {
    HOURS_PATTERN.get_or_init(|| Regex::new(r"every (\d+) hours?").unwrap())
}

/// Parse a cadence string into an hour interval.
///
/// Rules, checked in order, case-insensitive:
/// 1. "daily" → 24
/// 2. "every N hour(s)" → N
/// 3. anything containing "every hour" → 1
///
/// Returns `None` for everything else, which callers treat as a skip
/// signal for the current run.
pub fn parse_frequency(frequency: &str) -> Option<u32> {
    let lower = frequency.to_lowercase();
    if lower == "daily" {
        return Some(24);
    }
    if let Some(caps) = hours_pattern().captures(&lower) {
        if let Ok(hours) = caps[1].parse::<u32>() {
            return Some(hours);
        }
    }
    if lower.contains("every hour") {
        return Some(1);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_is_24_hours() {
        assert_eq!(parse_frequency("daily"), Some(24));
        assert_eq!(parse_frequency("Daily"), Some(24));
        assert_eq!(parse_frequency("DAILY"), Some(24));
    }

    #[test]
    fn test_every_n_hours() {
        assert_eq!(parse_frequency("every 6 hours"), Some(6));
        assert_eq!(parse_frequency("Every 6 Hours"), Some(6));
        assert_eq!(parse_frequency("every 1 hour"), Some(1));
        assert_eq!(parse_frequency("every 48 hours"), Some(48));
    }

    #[test]
    fn test_every_hour() {
        assert_eq!(parse_frequency("every hour"), Some(1));
        assert_eq!(parse_frequency("Every Hour"), Some(1));
    }

    #[test]
    fn test_unknown_formats_are_none() {
        assert_eq!(parse_frequency("weekly"), None);
        assert_eq!(parse_frequency("twice a day"), None);
        assert_eq!(parse_frequency(""), None);
        assert_eq!(parse_frequency("sometimes"), None);
    }

    #[test]
    fn test_format_then_parse_round_trip() {
        for n in [0u32, 1, 2, 3, 6, 8, 12, 24, 48, 100, 9999] {
            let formatted = format!("every {n} hours");
            assert_eq!(parse_frequency(&formatted), Some(n), "failed for n={n}");
        }
    }

    #[test]
    fn test_daily_must_be_exact_token() {
        // "daily" embedded in a longer phrase is not the exact token
        assert_eq!(parse_frequency("twice daily"), None);
    }
}
