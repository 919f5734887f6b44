use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};

use crate::core::Instant;
use crate::error::{TimelineError, TimelineResult};

/// Canonical text layout used when instants are written out.
pub const INSTANT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

const NAIVE_INSTANT_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Signed milliseconds from `from` to `to`, as a float for percentage math.
#[must_use]
pub fn millis_between(from: Instant, to: Instant) -> f64 {
    (to - from).num_milliseconds() as f64
}

/// Shifts an instant by whole days, saturating at the calendar limits.
#[must_use]
pub fn shift_days(instant: Instant, days: i64) -> Instant {
    TimeDelta::try_days(days)
        .and_then(|delta| instant.checked_add_signed(delta))
        .unwrap_or(if days < 0 {
            NaiveDateTime::MIN
        } else {
            NaiveDateTime::MAX
        })
}

#[must_use]
pub fn start_of_day(date: NaiveDate) -> Instant {
    date.and_time(NaiveTime::MIN)
}

/// First whole-hour boundary at or after `instant`.
#[must_use]
pub fn ceil_to_hour(instant: Instant) -> Option<Instant> {
    let floored = instant
        .with_minute(0)
        .and_then(|value| value.with_second(0))
        .and_then(|value| value.with_nanosecond(0))?;
    if floored == instant {
        return Some(instant);
    }
    floored.checked_add_signed(TimeDelta::hours(1))
}

/// Parses an instant as local wall-clock time.
///
/// Accepts RFC 3339 (converted from its offset to the local zone), naive
/// ISO date-times with or without seconds, and bare dates (midnight).
pub fn parse_instant(text: &str) -> TimelineResult<Instant> {
    let trimmed = text.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(with_offset.with_timezone(&Local).naive_local());
    }
    for format in NAIVE_INSTANT_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(start_of_day(date));
    }
    Err(TimelineError::InvalidData(format!(
        "`{trimmed}` is not a recognized date-time"
    )))
}

#[must_use]
pub fn format_instant(instant: Instant) -> String {
    instant.format(INSTANT_FORMAT).to_string()
}

/// Serde adapter keeping persisted instants readable by [`parse_instant`].
pub mod instant_serde {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{format_instant, parse_instant};
    use crate::core::Instant;

    pub fn serialize<S: Serializer>(instant: &Instant, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_instant(*instant))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Instant, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_instant(&raw).map_err(serde::de::Error::custom)
    }
}
