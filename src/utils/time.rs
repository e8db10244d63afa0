use chrono::{DateTime, Local, NaiveDate, Utc};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parses either a plain `YYYY-MM-DD` date or an RFC 3339 timestamp. Timestamps
/// resolve to their UTC calendar date.
pub fn parse_calendar_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).date_naive())
}

pub fn format_date(s: &str) -> String {
    match parse_calendar_date(s) {
        Some(date) => format_naive_date(date),
        None => "Invalid Date".to_string(),
    }
}

pub fn format_naive_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
