//! crates/study_planner_core/src/timestamp.rs
//!
//! Calendar timestamps in the two shapes clients send: naive wall-clock
//! values (`2024-01-01`) and offset-aware instants (`2024-01-01T00:00:00.000Z`).
//! A timestamp keeps its shape, so it is rendered back the way it came in.

use chrono::{
    DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Timelike,
    Weekday,
};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Offset-aware layouts without seconds, which RFC 3339 does not cover.
const AWARE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M%:z", "%Y-%m-%d %H:%M%:z"];

/// The same, with a `Z` in place of the offset.
const UTC_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%MZ", "%Y-%m-%d %H:%MZ"];

/// Naive layouts tried in order after the aware ones fail.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimestampError {
    #[error("Invalid isoformat string: '{0}'")]
    Invalid(String),
    #[error("Cannot compare offset-naive and offset-aware timestamps")]
    Incomparable,
    #[error("Timestamp out of range")]
    OutOfRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestamp {
    Naive(NaiveDateTime),
    Aware(DateTime<FixedOffset>),
}

impl Timestamp {
    /// Parses an ISO-8601 string. `Z` and numeric offsets are accepted as-is;
    /// strings without an offset become naive timestamps, and a bare date is
    /// taken as midnight.
    pub fn parse(input: &str) -> Result<Self, TimestampError> {
        if let Ok(aware) = DateTime::parse_from_rfc3339(input) {
            return Ok(Self::Aware(aware));
        }
        for format in AWARE_FORMATS {
            if let Ok(aware) = DateTime::parse_from_str(input, format) {
                return Ok(Self::Aware(aware));
            }
        }
        for format in UTC_FORMATS {
            let utc = NaiveDateTime::parse_from_str(input, format)
                .ok()
                .zip(FixedOffset::east_opt(0))
                .and_then(|(naive, zero)| zero.from_local_datetime(&naive).single());
            if let Some(aware) = utc {
                return Ok(Self::Aware(aware));
            }
        }
        for format in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
                return Ok(Self::Naive(naive));
            }
        }
        NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(Self::Naive)
            .ok_or_else(|| TimestampError::Invalid(input.to_string()))
    }

    /// The weekday in the timestamp's own offset.
    pub fn weekday(&self) -> Weekday {
        match self {
            Self::Naive(naive) => naive.weekday(),
            Self::Aware(aware) => aware.weekday(),
        }
    }

    /// Full English weekday name, e.g. `"Monday"`.
    pub fn weekday_name(&self) -> &'static str {
        match self.weekday() {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        }
    }

    /// Advances the wall clock by exactly one calendar day.
    pub fn next_day(&self) -> Result<Self, TimestampError> {
        let one_day = Duration::days(1);
        let next = match self {
            Self::Naive(naive) => naive.checked_add_signed(one_day).map(Self::Naive),
            Self::Aware(aware) => aware.checked_add_signed(one_day).map(Self::Aware),
        };
        next.ok_or(TimestampError::OutOfRange)
    }

    /// Strict ordering. Aware timestamps compare as instants; mixing a naive
    /// and an aware timestamp is an error.
    pub fn is_after(&self, other: &Timestamp) -> Result<bool, TimestampError> {
        match (self, other) {
            (Self::Naive(a), Self::Naive(b)) => Ok(a > b),
            (Self::Aware(a), Self::Aware(b)) => Ok(a > b),
            _ => Err(TimestampError::Incomparable),
        }
    }
}

fn write_wall_clock(f: &mut fmt::Formatter<'_>, naive: &NaiveDateTime) -> fmt::Result {
    if naive.nanosecond() == 0 {
        write!(f, "{}", naive.format("%Y-%m-%dT%H:%M:%S"))
    } else {
        write!(f, "{}", naive.format("%Y-%m-%dT%H:%M:%S%.6f"))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Naive(naive) => write_wall_clock(f, naive),
            Self::Aware(aware) => {
                write_wall_clock(f, &aware.naive_local())?;
                write!(f, "{}", aware.format("%:z"))
            }
        }
    }
}

impl FromStr for Timestamp {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_date_is_naive_midnight() {
        let ts = Timestamp::parse("2024-01-01").unwrap();
        assert!(matches!(ts, Timestamp::Naive(_)));
        assert_eq!(ts.to_string(), "2024-01-01T00:00:00");
        assert_eq!(ts.weekday_name(), "Monday");
    }

    #[test]
    fn utc_suffix_renders_as_zero_offset() {
        let ts = Timestamp::parse("2024-01-01T00:00:00.000Z").unwrap();
        assert!(matches!(ts, Timestamp::Aware(_)));
        assert_eq!(ts.to_string(), "2024-01-01T00:00:00+00:00");
    }

    #[test]
    fn fractional_seconds_are_kept_to_microseconds() {
        let ts = Timestamp::parse("2024-03-05T10:30:15.250").unwrap();
        assert_eq!(ts.to_string(), "2024-03-05T10:30:15.250000");
    }

    #[test]
    fn weekday_uses_the_local_offset() {
        // 23:00 on Sunday at -05:00 is already Monday in UTC.
        let ts = Timestamp::parse("2024-01-07T23:00:00-05:00").unwrap();
        assert_eq!(ts.weekday_name(), "Sunday");
        assert_eq!(ts.to_string(), "2024-01-07T23:00:00-05:00");
    }

    #[test]
    fn next_day_crosses_month_boundaries() {
        let ts = Timestamp::parse("2024-02-29").unwrap();
        assert_eq!(ts.next_day().unwrap().to_string(), "2024-03-01T00:00:00");
    }

    #[test]
    fn mixed_shapes_cannot_be_compared() {
        let naive = Timestamp::parse("2024-01-01").unwrap();
        let aware = Timestamp::parse("2024-01-01T00:00:00Z").unwrap();
        assert_eq!(naive.is_after(&aware), Err(TimestampError::Incomparable));
    }

    #[test]
    fn aware_timestamps_compare_as_instants() {
        let early = Timestamp::parse("2024-01-01T12:00:00+02:00").unwrap();
        let late = Timestamp::parse("2024-01-01T11:00:00Z").unwrap();
        assert!(late.is_after(&early).unwrap());
    }

    #[test]
    fn offsets_are_accepted_without_seconds() {
        let ts = Timestamp::parse("2024-01-01T10:00+02:00").unwrap();
        assert!(matches!(ts, Timestamp::Aware(_)));
        assert_eq!(ts.to_string(), "2024-01-01T10:00:00+02:00");

        let utc = Timestamp::parse("2024-01-01T10:00Z").unwrap();
        assert_eq!(utc.to_string(), "2024-01-01T10:00:00+00:00");

        let naive = Timestamp::parse("2024-01-01T10:00").unwrap();
        assert_eq!(naive.to_string(), "2024-01-01T10:00:00");
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(matches!(
            Timestamp::parse("next tuesday"),
            Err(TimestampError::Invalid(_))
        ));
    }

    #[test]
    fn serializes_as_a_string() {
        let ts = Timestamp::parse("2024-01-01").unwrap();
        assert_eq!(serde_json::to_value(ts).unwrap(), serde_json::json!("2024-01-01T00:00:00"));
        let back: Timestamp = serde_json::from_value(serde_json::json!("2024-01-01T00:00:00")).unwrap();
        assert_eq!(back, ts);
    }
}
