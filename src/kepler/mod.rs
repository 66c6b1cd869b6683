//! Kepler's equation solver
//!
//! Solves `M = E - e sin E` for the eccentric anomaly `E` by Newton-Raphson
//! iteration seeded at `E0 = M`, then derives the true anomaly and the orbital
//! radius.
//!
//! The default strategy runs a fixed ten iterations with no convergence test.
//! That is plenty for the eccentricities in the body catalog (all below 0.25)
//! and remains accurate to machine precision up to e = 0.9, but it is not a
//! general purpose solver: close to e = 1 the Newton step from `E0 = M` can
//! overshoot and ten iterations are no longer enough. Use
//! [`Iteration::Converge`] for such orbits.

/// Newton-Raphson iteration strategy
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Iteration {
    /// Run exactly this many Newton steps
    Fixed(usize),
    /// Iterate until the step size drops below `tolerance`, capped at `max_iterations`
    Converge { tolerance: f64, max_iterations: usize },
}

impl Default for Iteration {
    fn default() -> Self {
        Iteration::Fixed(KeplerSolver::DEFAULT_ITERATIONS)
    }
}

/// Result of solving Kepler's equation for one orbit position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSolution {
    /// Eccentric anomaly in radians
    pub eccentric_anomaly: f64,
    /// True anomaly in radians, in (-PI, PI]
    pub true_anomaly: f64,
    /// Distance from the focus, in the unit of the semi-major axis
    pub radius: f64,
}

/// Kepler's equation solver with a configurable iteration strategy
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KeplerSolver {
    iteration: Iteration,
}

impl KeplerSolver {
    /// Number of Newton steps used by the default strategy
    pub const DEFAULT_ITERATIONS: usize = 10;

    /// Create a solver with the default fixed-iteration strategy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a solver with an explicit iteration strategy
    pub fn with_iteration(iteration: Iteration) -> Self {
        Self { iteration }
    }

    /// Iterate until `|dE| < tolerance`, giving up after `max_iterations`
    pub fn converging(tolerance: f64, max_iterations: usize) -> Self {
        Self::with_iteration(Iteration::Converge {
            tolerance,
            max_iterations,
        })
    }

    /// The configured iteration strategy
    pub fn iteration(&self) -> Iteration {
        self.iteration
    }

    /// Solve for the eccentric anomaly given mean anomaly (radians) and eccentricity
    pub fn eccentric_anomaly(&self, mean_anomaly: f64, eccentricity: f64) -> f64 {
        let step = |e_anom: f64| {
            (e_anom - eccentricity * e_anom.sin() - mean_anomaly)
                / (1.0 - eccentricity * e_anom.cos())
        };

        let mut e_anom = mean_anomaly;
        match self.iteration {
            Iteration::Fixed(iterations) => {
                for _ in 0..iterations {
                    e_anom -= step(e_anom);
                }
            }
            Iteration::Converge {
                tolerance,
                max_iterations,
            } => {
                for _ in 0..max_iterations {
                    let delta = step(e_anom);
                    e_anom -= delta;
                    if delta.abs() < tolerance {
                        break;
                    }
                }
            }
        }
        e_anom
    }

    /// Solve Kepler's equation and derive true anomaly and radius
    ///
    /// # Arguments
    ///
    /// * `mean_anomaly` - Mean anomaly in radians, any range
    /// * `eccentricity` - Orbital eccentricity in [0, 1)
    /// * `semi_major_axis` - Semi-major axis; the returned radius uses the same unit
    pub fn solve(
        &self,
        mean_anomaly: f64,
        eccentricity: f64,
        semi_major_axis: f64,
    ) -> KeplerSolution {
        let eccentric_anomaly = self.eccentric_anomaly(mean_anomaly, eccentricity);
        let half = eccentric_anomaly / 2.0;

        let true_anomaly = 2.0
            * f64::atan2(
                (1.0 + eccentricity).sqrt() * half.sin(),
                (1.0 - eccentricity).sqrt() * half.cos(),
            );
        let radius = semi_major_axis * (1.0 - eccentricity * eccentric_anomaly.cos());

        KeplerSolution {
            eccentric_anomaly,
            true_anomaly,
            radius,
        }
    }
}

/// Solve Kepler's equation with the default solver
pub fn solve_kepler(mean_anomaly: f64, eccentricity: f64, semi_major_axis: f64) -> KeplerSolution {
    KeplerSolver::new().solve(mean_anomaly, eccentricity, semi_major_axis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TAU;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rstest::rstest;

    fn kepler_residual(e_anom: f64, e: f64, m: f64) -> f64 {
        (e_anom - e * e_anom.sin() - m).abs()
    }

    #[test]
    fn test_default_solver_satisfies_equation() {
        let solver = KeplerSolver::new();
        for ei in 0..=90 {
            let e = ei as f64 / 100.0;
            for mi in 0..628 {
                let m = mi as f64 / 100.0;
                let e_anom = solver.eccentric_anomaly(m, e);
                assert!(
                    kepler_residual(e_anom, e, m) < 1e-9,
                    "residual too large for e={}, M={}",
                    e,
                    m
                );
            }
        }
    }

    #[rstest]
    #[case(0.0)]
    #[case(0.5)]
    #[case(1.0)]
    #[case(3.0)]
    #[case(5.5)]
    fn test_circular_orbit(#[case] m: f64) {
        let sol = solve_kepler(m, 0.0, 2.5);
        assert_abs_diff_eq!(sol.eccentric_anomaly, m, epsilon = 1e-12);
        assert_abs_diff_eq!(sol.true_anomaly.rem_euclid(TAU), m.rem_euclid(TAU), epsilon = 1e-12);
        assert_relative_eq!(sol.radius, 2.5, epsilon = 1e-12);
    }

    #[test]
    fn test_perihelion_and_aphelion() {
        let e = 0.2;
        let peri = solve_kepler(0.0, e, 1.0);
        assert_abs_diff_eq!(peri.true_anomaly, 0.0, epsilon = 1e-12);
        assert_relative_eq!(peri.radius, 1.0 - e, epsilon = 1e-12);

        let aph = solve_kepler(std::f64::consts::PI, e, 1.0);
        assert_relative_eq!(aph.true_anomaly.abs(), std::f64::consts::PI, epsilon = 1e-12);
        assert_relative_eq!(aph.radius, 1.0 + e, epsilon = 1e-12);
    }

    #[test]
    fn test_radius_matches_true_anomaly() {
        // r = a(1 - e^2) / (1 + e cos nu) must agree with r = a(1 - e cos E)
        let (a, e) = (5.2026, 0.048498);
        for mi in 0..20 {
            let m = mi as f64 * 0.3;
            let sol = solve_kepler(m, e, a);
            let conic = a * (1.0 - e * e) / (1.0 + e * sol.true_anomaly.cos());
            assert_relative_eq!(sol.radius, conic, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_converging_solver_matches_default() {
        let fixed = KeplerSolver::new();
        let converging = KeplerSolver::converging(1e-14, 50);
        for mi in 0..50 {
            let m = mi as f64 * 0.125;
            assert_abs_diff_eq!(
                fixed.eccentric_anomaly(m, 0.2),
                converging.eccentric_anomaly(m, 0.2),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_converging_solver_high_eccentricity() {
        let solver = KeplerSolver::converging(1e-15, 200);
        for mi in 1..63 {
            let m = mi as f64 / 10.0;
            let e_anom = solver.eccentric_anomaly(m, 0.97);
            assert!(kepler_residual(e_anom, 0.97, m) < 1e-9);
        }
    }

    #[test]
    fn test_zero_iterations_returns_seed() {
        let solver = KeplerSolver::with_iteration(Iteration::Fixed(0));
        assert_eq!(solver.eccentric_anomaly(1.25, 0.1), 1.25);
        assert_eq!(KeplerSolver::new().iteration(), Iteration::Fixed(10));
    }
}
