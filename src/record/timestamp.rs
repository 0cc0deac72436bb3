//! Timestamp parsing for log headers.

use chrono::NaiveDateTime;

/// Header timestamp format, e.g. `1/2/2019 3:04:05 PM`.
pub const LOG_TIME_FORMAT: &str = "%m/%d/%Y %I:%M:%S %p";

/// Same layout on clients configured for a 24-hour clock.
const LOG_TIME_FORMAT_24H: &str = "%m/%d/%Y %H:%M:%S";

/// Parse a header timestamp.
///
/// Month, day and hour may be written without zero padding. Returns `None`
/// if the text matches neither the 12-hour nor the 24-hour layout.
#[must_use]
pub fn parse_log_time(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    NaiveDateTime::parse_from_str(text, LOG_TIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(text, LOG_TIME_FORMAT_24H))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_unpadded_pm() {
        let t = parse_log_time("1/2/2019 3:04:05 PM").unwrap();
        assert_eq!((t.year(), t.month(), t.day()), (2019, 1, 2));
        assert_eq!((t.hour(), t.minute(), t.second()), (15, 4, 5));
    }

    #[test]
    fn test_parse_padded_am() {
        let t = parse_log_time("12/25/2019 11:59:00 AM").unwrap();
        assert_eq!((t.month(), t.day(), t.hour()), (12, 25, 11));
    }

    #[test]
    fn test_parse_midnight() {
        let t = parse_log_time("6/6/2019 12:00:01 AM").unwrap();
        assert_eq!(t.hour(), 0);
    }

    #[test]
    fn test_parse_24_hour_clock() {
        let t = parse_log_time("6/6/2019 20:35:41").unwrap();
        assert_eq!(t.hour(), 20);
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        assert!(parse_log_time("  1/2/2019 3:04:05 PM ").is_some());
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse_log_time("Skins seen: 1=DA").is_none());
        assert!(parse_log_time("13/40/2019 3:04:05 PM").is_none());
        assert!(parse_log_time("").is_none());
    }
}
