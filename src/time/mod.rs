//! Time module for orbital estimation
//!
//! Orbital elements are referenced to the J2000.0 epoch, so every evaluation
//! starts by turning a UTC timestamp into a Julian date and then into elapsed
//! days or seconds since JD 2451545.0. No distinction is made between UTC,
//! TT and TDB; at the accuracy of the estimation models the ~64 s offset is
//! irrelevant.
//!
//! The module also parses the date text stored in the body catalog.

pub mod calendar;

use crate::constants::{DAY_S, DAY_US, J2000, YEAR_S};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};
use thiserror::Error;

/// Error type for time operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TimeError {
    #[error("Parsing error: {0}")]
    ParseError(String),

    #[error("Calendar error: {0}")]
    CalendarError(String),
}

/// Result type for time operations
pub type Result<T> = std::result::Result<T, TimeError>;

/// Convert a UTC timestamp to a Julian date
///
/// The integer day number comes from [`calendar::compute_julian_day`]; the
/// fractional part counts from noon, so 2000-01-01T12:00:00 maps to exactly
/// 2451545.0.
pub fn julian_date(dt: &DateTime<Utc>) -> f64 {
    let jdn = calendar::compute_julian_day(dt.year(), dt.month(), dt.day());
    let micros = (dt.nanosecond() / 1_000) as f64;

    jdn as f64
        + (dt.hour() as f64 - 12.0) / 24.0
        + dt.minute() as f64 / 1440.0
        + dt.second() as f64 / DAY_S
        + micros / DAY_US
}

/// Days elapsed since the J2000.0 epoch
pub fn days_since_epoch(jd: f64) -> f64 {
    jd - J2000
}

/// Seconds elapsed between J2000.0 and the given timestamp
pub fn seconds_since_j2000(dt: &DateTime<Utc>) -> f64 {
    days_since_epoch(julian_date(dt)) * DAY_S
}

/// Julian years (365.25 days) from `from` to `to`, negative if `to` is earlier
pub fn years_between(from: &DateTime<Utc>, to: &DateTime<Utc>) -> f64 {
    let elapsed = *to - *from;
    let seconds = match elapsed.num_microseconds() {
        Some(us) => us as f64 / 1_000_000.0,
        None => elapsed.num_seconds() as f64,
    };
    seconds / YEAR_S
}

/// Midnight UTC at the start of a calendar date
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(chrono::NaiveTime::MIN))
}

/// Parse a calendar date or timestamp
///
/// Accepted forms, tried in order:
/// - `YYYY-MM-DD` (interpreted as midnight UTC)
/// - RFC 3339, e.g. `2024-03-15T06:30:15Z` or with an explicit offset
/// - `YYYY-MM-DDTHH:MM:SS` or `YYYY-MM-DD HH:MM:SS` without offset (UTC)
pub fn parse_date(text: &str) -> Result<DateTime<Utc>> {
    let text = text.trim();

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Ok(start_of_day(date));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }

    Err(TimeError::ParseError(format!(
        "'{}' is not a YYYY-MM-DD date or an ISO 8601 timestamp",
        text
    )))
}

/// Build a UTC timestamp from calendar fields
pub fn utc(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> Result<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, second)
        .single()
        .ok_or_else(|| {
            TimeError::CalendarError(format!(
                "{:04}-{:02}-{:02} {:02}:{:02}:{:02} is not a valid UTC time",
                year, month, day, hour, minute, second
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::Duration;

    #[test]
    fn test_julian_date_at_j2000() {
        let epoch = utc(2000, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(julian_date(&epoch), J2000);
        assert_eq!(days_since_epoch(julian_date(&epoch)), 0.0);
        assert_eq!(seconds_since_j2000(&epoch), 0.0);
    }

    #[test]
    fn test_julian_date_fraction() {
        // Midnight is half a day before the noon-based day number
        let midnight = utc(1977, 9, 5, 0, 0, 0).unwrap();
        assert_eq!(julian_date(&midnight), 2443391.5);

        let t = utc(2024, 3, 15, 6, 30, 15).unwrap();
        assert_relative_eq!(julian_date(&t), 2460384.7710069446, epsilon = 1e-8);
    }

    #[test]
    fn test_julian_date_subsecond() {
        let t = utc(2000, 1, 1, 12, 0, 0).unwrap() + Duration::microseconds(500_000);
        assert_relative_eq!(julian_date(&t), 2451545.0 + 0.5 / DAY_S, max_relative = 1e-15);
        // One ulp of a Julian date near 2.45e6 is about 40 microseconds
        assert_relative_eq!(seconds_since_j2000(&t), 0.5, epsilon = 1e-4);
    }

    #[test]
    fn test_seconds_since_j2000_one_day() {
        let t = utc(2000, 1, 2, 12, 0, 0).unwrap();
        assert_relative_eq!(seconds_since_j2000(&t), DAY_S, epsilon = 1e-6);

        let before = utc(1999, 12, 31, 12, 0, 0).unwrap();
        assert_relative_eq!(seconds_since_j2000(&before), -DAY_S, epsilon = 1e-6);
    }

    #[test]
    fn test_years_between() {
        let a = utc(2000, 1, 1, 0, 0, 0).unwrap();
        let b = a + Duration::seconds(YEAR_S as i64);
        assert_relative_eq!(years_between(&a, &b), 1.0, epsilon = 1e-12);
        assert_relative_eq!(years_between(&b, &a), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_parse_date_forms() {
        let expected = utc(2016, 7, 4, 0, 0, 0).unwrap();
        assert_eq!(parse_date("2016-07-04").unwrap(), expected);
        assert_eq!(parse_date(" 2016-07-04 ").unwrap(), expected);
        assert_eq!(parse_date("2016-07-04T00:00:00Z").unwrap(), expected);
        assert_eq!(parse_date("2016-07-04T02:00:00+02:00").unwrap(), expected);
        assert_eq!(parse_date("2016-07-04 00:00:00").unwrap(), expected);
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(parse_date("").is_err());
        assert!(parse_date("TBD").is_err());
        assert!(parse_date("2016-13-01").is_err());
        assert!(parse_date("2016-02-30").is_err());
    }

    #[test]
    fn test_invalid_calendar_fields() {
        assert!(matches!(
            utc(2023, 2, 29, 0, 0, 0),
            Err(TimeError::CalendarError(_))
        ));
    }
}
