//! Recording timestamp extraction from filenames.
//!
//! Wildlife Acoustics style recorders encode the recording start time in
//! the filename as `YYYYMMDD_HHMMSS` (e.g. `SITE1_20230615_230045.wav`).

use chrono::NaiveDateTime;
use regex::Regex;
use std::sync::LazyLock;

/// Format used for the timestamp column of the report.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[allow(clippy::unwrap_used)]
static TIMESTAMP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{8}_\d{6}").unwrap());

/// Extract the recording start time from a filename.
///
/// Scans for an 8-digit date followed by an underscore and a 6-digit
/// time. Returns `None` if no such substring exists, or if every
/// candidate fails to parse as a real calendar date and time. A missing
/// timestamp is not an error; the report row is written with an empty
/// timestamp field.
pub fn timestamp_from_filename(filename: &str) -> Option<NaiveDateTime> {
    TIMESTAMP_RE
        .find_iter(filename)
        .find_map(|m| NaiveDateTime::parse_from_str(m.as_str(), "%Y%m%d_%H%M%S").ok())
}

/// Render an extracted timestamp for the report, or an empty string when
/// absent.
pub fn format_timestamp(timestamp: Option<NaiveDateTime>) -> String {
    timestamp.map_or_else(String::new, |t| t.format(TIMESTAMP_FORMAT).to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_wildlife_acoustics_filename() {
        let ts = timestamp_from_filename("SITE1_20230615_230045.wav").unwrap();
        assert_eq!(ts.format(TIMESTAMP_FORMAT).to_string(), "2023-06-15 23:00:45");
    }

    #[test]
    fn test_bare_timestamp() {
        let ts = timestamp_from_filename("20240101_000000.wav").unwrap();
        assert_eq!(ts.format(TIMESTAMP_FORMAT).to_string(), "2024-01-01 00:00:00");
    }

    #[test]
    fn test_no_timestamp_returns_none() {
        assert!(timestamp_from_filename("recording.wav").is_none());
        assert!(timestamp_from_filename("site_a_night_3.wav").is_none());
        assert!(timestamp_from_filename("").is_none());
    }

    #[test]
    fn test_too_few_digits_returns_none() {
        // 7-digit date and 5-digit time do not match the pattern
        assert!(timestamp_from_filename("2023615_23045.wav").is_none());
    }

    #[test]
    fn test_invalid_calendar_date_returns_none() {
        // Matches the digit pattern but is not a real date
        assert!(timestamp_from_filename("SITE_20231345_990000.wav").is_none());
    }

    #[test]
    fn test_first_parseable_match_wins() {
        // An invalid candidate earlier in the name is skipped
        let ts = timestamp_from_filename("99999999_999999_20230615_230045.wav").unwrap();
        assert_eq!(ts.format(TIMESTAMP_FORMAT).to_string(), "2023-06-15 23:00:45");
    }

    #[test]
    fn test_format_timestamp_none_is_empty() {
        assert_eq!(format_timestamp(None), "");
    }
}
