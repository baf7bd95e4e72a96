//! Timestamp formatting
//!
//! Accepts either epoch milliseconds or a date-parsable string and
//! returns a human-readable local-time string. Unparseable input gives
//! `None` rather than an error.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A value that can be interpreted as a point in time
#[derive(Debug, Clone)]
pub enum TimestampValue {
    EpochMillis(i64),
    Text(String),
}

impl From<i64> for TimestampValue {
    fn from(ms: i64) -> Self {
        TimestampValue::EpochMillis(ms)
    }
}

impl From<&str> for TimestampValue {
    fn from(text: &str) -> Self {
        TimestampValue::Text(text.to_string())
    }
}

impl From<String> for TimestampValue {
    fn from(text: String) -> Self {
        TimestampValue::Text(text)
    }
}

/// Format a timestamp for display in local time
pub fn format_timestamp(value: impl Into<TimestampValue>) -> Option<String> {
    let local: DateTime<Local> = match value.into() {
        TimestampValue::EpochMillis(ms) => Local.timestamp_millis_opt(ms).single()?,
        TimestampValue::Text(text) => parse_text(&text)?,
    };
    Some(local.format(DISPLAY_FORMAT).to_string())
}

fn parse_text(text: &str) -> Option<DateTime<Local>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Local));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S") {
        return Local.from_local_datetime(&naive).single();
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Local
            .from_local_datetime(&date.and_hms_opt(0, 0, 0)?)
            .single();
    }
    None
}
