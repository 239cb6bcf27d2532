use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Reduce a backend date field to its calendar day.
///
/// The studio backend is inconsistent about date formats: some records carry
/// full RFC 3339 timestamps, some bare `YYYY-MM-DD` dates, and some plain
/// garbage (`"invalid-date"` has been observed in production exports).
/// Anything that does not resolve to a real calendar date yields `None`;
/// callers branch on the result instead of catching anything.
pub fn parse_calendar_day(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(input) {
        return Some(ts.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    input.parse::<NaiveDate>().ok()
}
