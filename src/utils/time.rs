//! Time utilities: parsing HH:MM and RFC 3339 instants.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveTime, Utc};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Parse an `--now` override such as `2025-09-02T04:30:00Z`.
pub fn parse_instant(s: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| AppError::InvalidTime(s.to_string()))
}

pub fn parse_optional_instant(input: Option<&String>) -> AppResult<Option<DateTime<Utc>>> {
    input.map(|s| parse_instant(s)).transpose()
}
