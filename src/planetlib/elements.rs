//! Static orbital elements for planets and moons
//!
//! Elements are loaded once with the body catalog and validated there. The
//! position engines assume validated input and never re-check it.

use crate::constants::{AU_KM, DAY_S, DEG2RAD, YEAR_S};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised at catalog load when a body's elements cannot describe a bound orbit
#[derive(Debug, Error, Clone, PartialEq)]
#[error("Invalid orbital elements for {body}: {reason}")]
pub struct InvalidOrbitalElements {
    /// Name of the offending body
    pub body: String,
    /// Which constraint was violated
    pub reason: String,
}

impl InvalidOrbitalElements {
    pub fn new(body: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            reason: reason.into(),
        }
    }
}

/// Keplerian elements of a heliocentric orbit at the J2000.0 epoch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    /// Semi-major axis in AU
    pub semi_major_axis_au: f64,
    /// Eccentricity, in [0, 1)
    pub eccentricity: f64,
    /// Inclination to the ecliptic in degrees
    pub inclination_deg: f64,
    /// Sidereal orbital period in Julian years
    pub orbital_period_years: f64,
    /// Mean anomaly at J2000.0 in degrees
    pub mean_anomaly_0_deg: f64,
    /// Argument of perihelion at J2000.0 in degrees
    pub perihelion_arg_0_deg: f64,
    /// Longitude of the ascending node at J2000.0 in degrees
    pub ascending_node_0_deg: f64,
}

impl OrbitalElements {
    /// Check the elements describe a bound, non-degenerate orbit
    pub fn validate(&self, body: &str) -> Result<(), InvalidOrbitalElements> {
        let values = [
            self.semi_major_axis_au,
            self.eccentricity,
            self.inclination_deg,
            self.orbital_period_years,
            self.mean_anomaly_0_deg,
            self.perihelion_arg_0_deg,
            self.ascending_node_0_deg,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(InvalidOrbitalElements::new(body, "elements must be finite"));
        }
        if !(0.0..1.0).contains(&self.eccentricity) {
            return Err(InvalidOrbitalElements::new(
                body,
                format!("eccentricity {} is outside [0, 1)", self.eccentricity),
            ));
        }
        if self.orbital_period_years <= 0.0 {
            return Err(InvalidOrbitalElements::new(
                body,
                format!("orbital period {} years is not positive", self.orbital_period_years),
            ));
        }
        if self.semi_major_axis_au <= 0.0 {
            return Err(InvalidOrbitalElements::new(
                body,
                format!("semi-major axis {} AU is not positive", self.semi_major_axis_au),
            ));
        }
        Ok(())
    }

    /// Orbital period in seconds
    pub fn period_seconds(&self) -> f64 {
        self.orbital_period_years * YEAR_S
    }

    /// Mean motion in radians per second
    pub fn mean_motion(&self) -> f64 {
        std::f64::consts::TAU / self.period_seconds()
    }

    pub fn inclination_rad(&self) -> f64 {
        self.inclination_deg * DEG2RAD
    }

    pub fn mean_anomaly_0_rad(&self) -> f64 {
        self.mean_anomaly_0_deg * DEG2RAD
    }

    /// Argument of perihelion in radians
    ///
    /// Carried for completeness; the planet engine measures the true anomaly
    /// from the node line and does not rotate by this angle.
    pub fn perihelion_arg_0_rad(&self) -> f64 {
        self.perihelion_arg_0_deg * DEG2RAD
    }

    pub fn ascending_node_0_rad(&self) -> f64 {
        self.ascending_node_0_deg * DEG2RAD
    }
}

/// Orbit of a moon around its parent planet, treated as circular
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoonElements {
    /// Semi-major axis in kilometers
    pub semi_major_axis_km: f64,
    /// Sidereal orbital period in days
    pub orbital_period_days: f64,
    /// Inclination in degrees
    pub inclination_deg: f64,
}

impl MoonElements {
    pub fn validate(&self, body: &str) -> Result<(), InvalidOrbitalElements> {
        if ![self.semi_major_axis_km, self.orbital_period_days, self.inclination_deg]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(InvalidOrbitalElements::new(body, "elements must be finite"));
        }
        if self.orbital_period_days <= 0.0 {
            return Err(InvalidOrbitalElements::new(
                body,
                format!("orbital period {} days is not positive", self.orbital_period_days),
            ));
        }
        if self.semi_major_axis_km <= 0.0 {
            return Err(InvalidOrbitalElements::new(
                body,
                format!("semi-major axis {} km is not positive", self.semi_major_axis_km),
            ));
        }
        Ok(())
    }

    pub fn semi_major_axis_au(&self) -> f64 {
        self.semi_major_axis_km / AU_KM
    }

    pub fn period_seconds(&self) -> f64 {
        self.orbital_period_days * DAY_S
    }

    pub fn inclination_rad(&self) -> f64 {
        self.inclination_deg * DEG2RAD
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn earth() -> OrbitalElements {
        OrbitalElements {
            semi_major_axis_au: 1.0,
            eccentricity: 0.0167086,
            inclination_deg: 0.00005,
            orbital_period_years: 1.000017,
            mean_anomaly_0_deg: 358.617,
            perihelion_arg_0_deg: 102.947,
            ascending_node_0_deg: 0.0,
        }
    }

    #[test]
    fn test_valid_elements() {
        assert!(earth().validate("Earth").is_ok());
    }

    #[test]
    fn test_rejects_unbound_orbit() {
        let mut e = earth();
        e.eccentricity = 1.0;
        let err = e.validate("Comet").unwrap_err();
        assert_eq!(err.body, "Comet");
        assert!(err.to_string().contains("eccentricity"));

        e.eccentricity = -0.1;
        assert!(e.validate("Comet").is_err());
    }

    #[test]
    fn test_rejects_degenerate_period_and_axis() {
        let mut e = earth();
        e.orbital_period_years = 0.0;
        assert!(e.validate("X").is_err());

        let mut e = earth();
        e.semi_major_axis_au = 0.0;
        assert!(e.validate("X").is_err());

        let mut e = earth();
        e.semi_major_axis_au = -1.0;
        let err = e.validate("X").unwrap_err();
        assert!(err.to_string().contains("semi-major axis"));

        let mut e = earth();
        e.inclination_deg = f64::NAN;
        assert!(e.validate("X").is_err());
    }

    #[test]
    fn test_moon_validation_and_units() {
        let moon = MoonElements {
            semi_major_axis_km: 384_400.0,
            orbital_period_days: 27.321582,
            inclination_deg: 5.145,
        };
        assert!(moon.validate("Moon").is_ok());
        assert_relative_eq!(moon.semi_major_axis_au(), 384_400.0 / 1.496e8);
        assert_relative_eq!(moon.period_seconds(), 27.321582 * 86_400.0);

        let bad = MoonElements {
            orbital_period_days: -1.0,
            ..moon
        };
        assert!(bad.validate("Moon").is_err());

        let negative_axis = MoonElements {
            semi_major_axis_km: -384_400.0,
            ..moon
        };
        assert!(negative_axis.validate("Moon").is_err());
    }

    #[test]
    fn test_mean_motion() {
        let e = earth();
        assert_relative_eq!(
            e.mean_motion() * e.period_seconds(),
            std::f64::consts::TAU,
            epsilon = 1e-12
        );
    }
}
