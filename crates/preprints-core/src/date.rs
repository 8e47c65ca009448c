//! Timestamp formatting for API output.

use chrono::{DateTime, SecondsFormat, Utc};

/// Format a timestamp as `YYYY-MM-DDTHH:MM:SSZ`, dropping sub-second precision.
pub fn normalize_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_truncates_milliseconds() {
        let ts = parse("2023-05-01T12:30:45.678Z");
        assert_eq!(normalize_date(&ts), "2023-05-01T12:30:45Z");
    }

    #[test]
    fn test_whole_seconds_unchanged() {
        let ts = parse("2022-11-28T00:00:00Z");
        assert_eq!(normalize_date(&ts), "2022-11-28T00:00:00Z");
    }

    #[test]
    fn test_converts_offset_to_utc() {
        let ts = parse("2023-01-01T01:15:00+02:00");
        assert_eq!(normalize_date(&ts), "2022-12-31T23:15:00Z");
    }
}
