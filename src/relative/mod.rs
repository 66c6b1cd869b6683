//! Relative motion between two bodies

use crate::planetlib::StateVector;
use serde::{Deserialize, Serialize};

/// Separation and relative speed of one body as seen from another
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RelativeMotion {
    /// Distance between the bodies in AU
    pub distance_au: f64,
    /// Magnitude of the velocity difference in km/s
    pub speed_km_s: f64,
}

/// Motion of `subject` relative to `reference`
pub fn relative_motion(subject: &StateVector, reference: &StateVector) -> RelativeMotion {
    RelativeMotion {
        distance_au: (subject.position - reference.position).norm(),
        speed_km_s: (subject.velocity - reference.velocity).norm(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Point3, Vector3};

    fn state(p: [f64; 3], v: [f64; 3]) -> StateVector {
        StateVector::from_vectors(Point3::new(p[0], p[1], p[2]), Vector3::new(v[0], v[1], v[2]))
    }

    #[test]
    fn test_identity_is_zero() {
        let a = state([0.98, -0.02, 1e-8], [0.75, 30.27, 2e-5]);
        let rel = relative_motion(&a, &a);
        assert_eq!(rel.distance_au, 0.0);
        assert_eq!(rel.speed_km_s, 0.0);
    }

    #[test]
    fn test_symmetric_magnitudes() {
        let a = state([1.0, 0.0, 0.0], [0.0, 30.0, 0.0]);
        let b = state([-4.0, 3.0, 0.0], [10.0, 0.0, 0.0]);
        let ab = relative_motion(&a, &b);
        let ba = relative_motion(&b, &a);
        assert_eq!(ab, ba);
        assert_eq!(ab.distance_au, (25.0f64 + 9.0).sqrt());
        assert_eq!(ab.speed_km_s, (100.0f64 + 900.0).sqrt());
    }
}
