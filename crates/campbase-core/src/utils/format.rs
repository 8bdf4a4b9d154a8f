use chrono::{Datelike, NaiveDate};

use crate::models::parse_segment_date;

/// Truncate a string to a maximum length, adding ellipsis if needed
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Format a calendar date as "Jul 01, 2025"
pub fn format_day(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

/// Format a raw form date for display, "TBD" when empty, raw text when it
/// doesn't parse.
pub fn format_date(raw: &str) -> String {
    if raw.trim().is_empty() {
        return "TBD".to_string();
    }
    match parse_segment_date(raw) {
        Some(date) => format_day(date),
        None => raw.to_string(),
    }
}

/// "Jul 01 - Jul 10, 2025", or the full form on both sides across years.
pub fn format_range(start: NaiveDate, end: NaiveDate) -> String {
    if start == end {
        format_day(start)
    } else if start.year() == end.year() {
        format!("{} - {}", start.format("%b %d"), format_day(end))
    } else {
        format!("{} - {}", format_day(start), format_day(end))
    }
}

/// Singular/plural noun for a count: "1 person", "3 people".
pub fn pluralize(count: i64, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("test date")
    }

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("Hello", 10), "Hello");
        assert_eq!(truncate_string("Hello World", 8), "Hello...");
        assert_eq!(truncate_string("Hi", 2), "Hi");
        assert_eq!(truncate_string("Città", 4), "C...");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-07-01"), "Jul 01, 2025");
        assert_eq!(format_date(""), "TBD");
        assert_eq!(format_date("sometime"), "sometime");
    }

    #[test]
    fn test_format_range() {
        assert_eq!(format_range(date(2025, 7, 1), date(2025, 7, 10)), "Jul 01 - Jul 10, 2025");
        assert_eq!(format_range(date(2025, 7, 1), date(2025, 7, 1)), "Jul 01, 2025");
        assert_eq!(
            format_range(date(2025, 12, 30), date(2026, 1, 2)),
            "Dec 30, 2025 - Jan 02, 2026"
        );
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(1, "person", "people"), "1 person");
        assert_eq!(pluralize(0, "person", "people"), "0 people");
    }
}
