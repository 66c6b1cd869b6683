//! Planetary and lunar position engines
//!
//! Positions are heliocentric ecliptic coordinates in AU, velocities are in
//! km/s. Planets come from two-body Keplerian propagation of static J2000.0
//! elements; moons are circular orbits stacked on top of their parent planet.

pub mod elements;
pub mod moon;
pub mod planet;

use crate::kepler::KeplerSolver;
use chrono::{DateTime, Utc};
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

pub use elements::{InvalidOrbitalElements, MoonElements, OrbitalElements};

/// Heliocentric state of a body at one instant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StateVector {
    /// Position in AU (Astronomical Units)
    pub position: Point3<f64>,
    /// Velocity in km/s
    pub velocity: Vector3<f64>,
    /// Distance from the Sun in AU
    pub distance_from_sun: f64,
    /// Speed relative to the Sun in km/s
    pub speed_rel_sun: f64,
}

impl StateVector {
    /// Build a state whose distance and speed are the norms of position and velocity
    pub fn from_vectors(position: Point3<f64>, velocity: Vector3<f64>) -> Self {
        Self {
            position,
            velocity,
            distance_from_sun: position.coords.norm(),
            speed_rel_sun: velocity.norm(),
        }
    }

    /// The Sun itself, at rest at the origin
    pub fn origin() -> Self {
        Self::from_vectors(Point3::origin(), Vector3::zeros())
    }
}

/// Position engine for catalog planets and moons
///
/// Holds the Kepler solver configuration; evaluation is otherwise stateless
/// and the engine may be shared freely between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ephemeris {
    solver: KeplerSolver,
}

impl Ephemeris {
    /// Create an engine with the default fixed-iteration Kepler solver
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with a specific Kepler solver
    pub fn with_solver(solver: KeplerSolver) -> Self {
        Self { solver }
    }

    pub fn solver(&self) -> &KeplerSolver {
        &self.solver
    }

    /// State of a planet at the given instant
    pub fn planet_state(&self, elements: &OrbitalElements, when: &DateTime<Utc>) -> StateVector {
        planet::planet_state_with(&self.solver, elements, when)
    }

    /// State of a moon, given its parent's state at the same instant
    pub fn moon_state(
        &self,
        elements: &MoonElements,
        parent: &StateVector,
        when: &DateTime<Utc>,
    ) -> StateVector {
        moon::moon_state(elements, parent, when)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_from_vectors() {
        let s = StateVector::from_vectors(Point3::new(3.0, 4.0, 0.0), Vector3::new(0.0, 0.0, 2.0));
        assert_eq!(s.distance_from_sun, 5.0);
        assert_eq!(s.speed_rel_sun, 2.0);

        let sun = StateVector::origin();
        assert_eq!(sun.distance_from_sun, 0.0);
        assert_eq!(sun.speed_rel_sun, 0.0);
    }

    #[test]
    fn test_state_vector_serializes() {
        let s = StateVector::from_vectors(Point3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 29.8, 0.0));
        let json = serde_json::to_string(&s).unwrap();
        let back: StateVector = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}
