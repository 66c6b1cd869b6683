//! Human-readable presentation of distances, speeds, pressures and mission
//! elapsed time

use crate::constants::AU_KM;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

const ATM_PA: f64 = 101_325.0;

/// Distance given in AU, printed in kilometres
pub fn format_distance(au: f64) -> String {
    format!("{:.2} km", au * AU_KM)
}

pub fn format_speed(km_s: f64) -> String {
    format!("{:.2} km/s", km_s)
}

/// Pressure in Pa, scaled to the most readable unit
pub fn format_pressure(pascals: Option<f64>) -> String {
    let p = match pascals {
        Some(p) => p,
        None => return "No atmosphere".to_string(),
    };

    if p >= 1e6 {
        format!("{:.2} MPa", p / 1e6)
    } else if p >= ATM_PA {
        format!("{:.2} atm", p / ATM_PA)
    } else if p >= 1e3 {
        format!("{:.2} kPa", p / 1e3)
    } else if p >= 1e2 {
        format!("{:.1} hPa", p / 1e2)
    } else if p >= 1.0 {
        format!("{:.2} Pa", p)
    } else if p >= 1e-3 {
        format!("{:.2} mPa", p * 1e3)
    } else if p >= 1e-6 {
        format!("{:.2} µPa", p * 1e6)
    } else if p >= 1e-9 {
        format!("{:.2} nPa", p * 1e9)
    } else {
        format!("{:.2e} Pa", p)
    }
}

/// Time since launch split into 365-day years, days and hours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionElapsed {
    pub years: i64,
    pub days: i64,
    pub hours: i64,
}

impl MissionElapsed {
    /// Elapsed time from `launch` to `now`, zero if `now` is earlier
    pub fn between(launch: &DateTime<Utc>, now: &DateTime<Utc>) -> Self {
        let delta = (*now - *launch).max(chrono::Duration::zero());
        let whole_days = delta.num_days();
        let hours = (delta - chrono::Duration::days(whole_days)).num_hours();
        Self {
            years: whole_days / 365,
            days: whole_days % 365,
            hours,
        }
    }
}

impl fmt::Display for MissionElapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}y {}d {}h", self.years, self.days, self.hours)
    }
}
