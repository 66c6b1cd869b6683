//! Planet position engine
//!
//! Two-body propagation of static J2000.0 elements. The orbital-plane state is
//! rotated about the plane's x-axis by the inclination and then about the
//! ecliptic z-axis by the longitude of the ascending node. The argument of
//! perihelion is not applied: the true anomaly is measured straight from the
//! node line, which is the behaviour the catalog's mean anomalies were fitted
//! against.

use super::{OrbitalElements, StateVector};
use crate::constants::{AU_KM, GM_SUN};
use crate::kepler::KeplerSolver;
use crate::time;
use chrono::{DateTime, Utc};
use nalgebra::{Point3, Rotation3, Vector3};

/// Rotation from the orbital plane into the ecliptic frame
pub fn orbit_to_ecliptic(inclination: f64, ascending_node: f64) -> Rotation3<f64> {
    let tilt = Rotation3::from_axis_angle(&Vector3::x_axis(), inclination);
    let node = Rotation3::from_axis_angle(&Vector3::z_axis(), ascending_node);
    node * tilt
}

/// Vis-viva orbital speed in km/s for heliocentric distance `r_au` on an orbit
/// of semi-major axis `a_au`
///
/// Clamped at zero for the unphysical case `r > 2a`.
pub fn vis_viva_speed(r_au: f64, a_au: f64) -> f64 {
    (GM_SUN * (2.0 / (r_au * AU_KM) - 1.0 / (a_au * AU_KM)))
        .max(0.0)
        .sqrt()
}

/// Heliocentric state of a planet with the default Kepler solver
pub fn planet_state(elements: &OrbitalElements, when: &DateTime<Utc>) -> StateVector {
    planet_state_with(&KeplerSolver::new(), elements, when)
}

/// Heliocentric state of a planet using the given Kepler solver
pub fn planet_state_with(
    solver: &KeplerSolver,
    elements: &OrbitalElements,
    when: &DateTime<Utc>,
) -> StateVector {
    let a = elements.semi_major_axis_au;
    let e = elements.eccentricity;

    let t = time::seconds_since_j2000(when);
    let mean_anomaly = elements.mean_anomaly_0_rad() + elements.mean_motion() * t;

    let solution = solver.solve(mean_anomaly, e, a);
    let (r, nu) = (solution.radius, solution.true_anomaly);

    let rotation = orbit_to_ecliptic(elements.inclination_rad(), elements.ascending_node_0_rad());

    let position = rotation * Point3::new(r * nu.cos(), r * nu.sin(), 0.0);

    // Speed from vis-viva, direction approximated from the true anomaly
    let speed = vis_viva_speed(r, a);
    let plane_velocity = Vector3::new(
        -speed * nu.sin(),
        speed * (1.0 - e * e).sqrt() * nu.cos(),
        0.0,
    );
    let velocity = rotation * plane_velocity;

    log::trace!(
        "planet state: M={:.6} E={:.6} nu={:.6} r={:.6} AU v={:.3} km/s",
        mean_anomaly,
        solution.eccentric_anomaly,
        nu,
        r,
        speed
    );

    StateVector {
        position,
        velocity,
        distance_from_sun: r,
        speed_rel_sun: speed,
    }
}
