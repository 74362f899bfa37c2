//! Day arithmetic over vehicle timestamps.

use chrono::{DateTime, NaiveDate, SecondsFormat, TimeDelta, Utc};

use crate::error::{DealerError, Result};

/// Whole calendar days from `from` to `to`; negative when `to` is earlier.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Days from `last` to the reference date `offset_days` before `now`.
///
/// Both points are reduced to their UTC calendar date first, so the time of
/// day never moves the result. `None` when the reference date falls outside
/// the representable calendar.
pub fn days_past_reference(
    last: DateTime<Utc>,
    now: DateTime<Utc>,
    offset_days: i64,
) -> Option<i64> {
    let offset = TimeDelta::try_days(offset_days)?;
    let reference = now.date_naive().checked_sub_signed(offset)?;
    Some(days_between(last.date_naive(), reference))
}

/// Parses an RFC 3339 timestamp such as `2024-03-01T09:30:00Z`.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DealerError::CorruptTimestamp(format!("{s:?}: {e}")))
}

pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}
