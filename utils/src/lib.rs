//! Shared utilities for the homework-bot workspace.

use chrono::{DateTime, Local, Utc};

/// Current Unix time in whole seconds.
pub fn unix_timestamp_secs() -> i64 {
    Utc::now().timestamp()
}

/// Formats a local time as `YYYY-MM-DD HH:MM:SS`.
pub fn format_local_datetime(at: DateTime<Local>) -> String {
    at.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Parses a boolean flag as written in environment variables.
///
/// Accepts `true`/`false`, `1`/`0`, `yes`/`no` and `on`/`off`, case-insensitively.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_local_datetime() {
        let at = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        assert_eq!(format_local_datetime(at), "2024-03-09 07:05:01");
    }

    #[test]
    fn test_unix_timestamp_is_after_2020() {
        assert!(unix_timestamp_secs() > 1_577_836_800);
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" 0 "), Some(false));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
