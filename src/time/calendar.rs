//! Calendar date and Julian day number conversion functions
//!
//! All conversions use the proleptic Gregorian calendar.

/// Convert (year, month, day) to the Julian day number of that civil date
///
/// The day number refers to the Julian day that begins at noon of the given
/// date, so `compute_julian_day(2000, 1, 1)` is 2451545.
pub fn compute_julian_day(year: i32, month: u32, day: u32) -> i64 {
    let a = (14 - month as i64).div_euclid(12);
    let y = year as i64 + 4800 - a;
    let m = month as i64 + 12 * a - 3;

    day as i64 + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045
}

/// Convert a Julian day number back to a calendar date (year, month, day)
pub fn compute_calendar_date(jd_integer: i64) -> (i32, u32, u32) {
    // See the Explanatory Supplement to the Astronomical Almanac 15.11.
    let f = jd_integer + 1401 + ((4 * jd_integer + 274277) / 146097 * 3 / 4 - 38);
    let e = 4 * f + 3;
    let g = (e % 1461) / 4;
    let h = 5 * g + 2;
    let day = (h % 153) / 5 + 1;
    let month = (h / 153 + 2) % 12 + 1;
    let year = e / 1461 - 4716 + (12 + 2 - month) / 12;

    (year as i32, month as u32, day as u32)
}

/// Format a Julian date as a calendar date string (YYYY-MM-DD)
pub fn format_date(jd: f64) -> String {
    let (year, month, day) = compute_calendar_date((jd + 0.5).floor() as i64);
    format!("{:04}-{:02}-{:02}", year, month, day)
}
