//! Constants module for orbital estimation
//!
//! Every physical constant used by the engine lives here. The values are the
//! rounded figures the catalog was tuned against, not IAU best estimates, so
//! changing them shifts every regression baseline in the test suite.

use std::f64::consts::PI;

// Astronomical distances
/// Astronomical Unit in kilometers (rounded catalog value)
pub const AU_KM: f64 = 1.496e8;

// Time constants
/// Seconds in a day
pub const DAY_S: f64 = 86_400.0;
/// Days in a Julian year
pub const YEAR_DAYS: f64 = 365.25;
/// Seconds in a Julian year
pub const YEAR_S: f64 = YEAR_DAYS * DAY_S;
/// J2000.0 epoch as Julian date
pub const J2000: f64 = 2_451_545.0;
/// Microseconds in a day
pub const DAY_US: f64 = 86_400_000_000.0;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Tau (2*PI) for full circle
pub const TAU: f64 = 2.0 * PI;

// Physics
/// Gravitational constant in km^3 kg^-1 s^-2
pub const G_KM: f64 = 6.674_30e-20;
/// Mass of the Sun in kg
pub const M_SUN: f64 = 1.989e30;
/// Solar GM in km^3/s^2, derived from `G_KM` and `M_SUN`
pub const GM_SUN: f64 = G_KM * M_SUN;

// Spacecraft heuristics
/// Fallback speed in km/s when no better estimate applies
pub const FALLBACK_SPEED_KM_S: f64 = 30.0;
/// Fraction of launch speed retained by probes that left the solar system
pub const COASTING_RETENTION: f64 = 0.95;
/// Out-of-plane tilt applied to spacecraft positions
pub const SPACECRAFT_TILT: f64 = 0.05;
