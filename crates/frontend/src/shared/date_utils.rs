/// Utilities for date and time formatting
use chrono::{DateTime, Utc};

/// Format a timestamp as `YYYY-MM-DD HH:MM` (UTC)
/// Example: 2024-03-15T14:02:26Z -> "2024-03-15 14:02"
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

/// Format a game window, collapsing the date when both ends fall on the same day
/// Example: "2024-03-15 08:00 - 18:00"
pub fn format_window(start: &DateTime<Utc>, end: &DateTime<Utc>) -> String {
    if start.date_naive() == end.date_naive() {
        format!("{} - {}", format_datetime(start), end.format("%H:%M"))
    } else {
        format!("{} - {}", format_datetime(start), format_datetime(end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_datetime(&dt), "2024-03-15 14:02");
    }

    #[test]
    fn test_format_window_same_day() {
        let start = Utc.with_ymd_and_hms(2024, 3, 15, 8, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 3, 15, 18, 0, 0).unwrap();
        assert_eq!(format_window(&start, &end), "2024-03-15 08:00 - 18:00");
    }

    #[test]
    fn test_format_window_multi_day() {
        let start = Utc.with_ymd_and_hms(2024, 3, 15, 8, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 3, 17, 8, 0, 0).unwrap();
        assert_eq!(
            format_window(&start, &end),
            "2024-03-15 08:00 - 2024-03-17 08:00"
        );
    }
}
