//! Moon position engine
//!
//! Moons are placed on circular orbits with zero mean anomaly at J2000.0, so
//! only the orbital period carries real phase information. The orbital plane
//! is tilted about its x-axis by the inclination; no node rotation is applied.
//! The resulting offset is added to the parent planet's heliocentric state.

use super::{MoonElements, StateVector};
use crate::constants::AU_KM;
use crate::time;
use chrono::{DateTime, Utc};
use nalgebra::{Rotation3, Vector3};

/// Planet-relative position (AU) and velocity (km/s) of a moon
pub fn moon_offset(elements: &MoonElements, when: &DateTime<Utc>) -> (Vector3<f64>, Vector3<f64>) {
    let a = elements.semi_major_axis_au();
    let period = elements.period_seconds();

    let t = time::seconds_since_j2000(when);
    let mean_anomaly = std::f64::consts::TAU / period * t;
    let (sin_m, cos_m) = mean_anomaly.sin_cos();

    let tilt = Rotation3::from_axis_angle(&Vector3::x_axis(), elements.inclination_rad());

    let position = tilt * Vector3::new(a * cos_m, a * sin_m, 0.0);

    let speed = std::f64::consts::TAU * a * AU_KM / period;
    let velocity = tilt * Vector3::new(-speed * sin_m, speed * cos_m, 0.0);

    (position, velocity)
}

/// Heliocentric state of a moon given its parent's state at the same instant
pub fn moon_state(
    elements: &MoonElements,
    parent: &StateVector,
    when: &DateTime<Utc>,
) -> StateVector {
    let (offset, relative_velocity) = moon_offset(elements, when);
    StateVector::from_vectors(parent.position + offset, parent.velocity + relative_velocity)
}
