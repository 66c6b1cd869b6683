//! Mission profiles for the spacecraft estimator
//!
//! Each (status, target body) pair maps to a distance model, an optional
//! rule for when the probe settles at its destination, and a speed model.
//! Targets missing from the tables fall back to a generic profile for the
//! status.

use super::{MissionStatus, TrajectoryType};
use crate::constants::{COASTING_RETENTION, FALLBACK_SPEED_KM_S, TAU};
use crate::planetlib::planet::vis_viva_speed;
use crate::planetlib::StateVector;
use lazy_static::lazy_static;
use std::collections::HashMap;

/// Heliocentric distance as a function of mission elapsed time
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DistanceModel {
    /// Linear recession: `base + rate * t`
    Recession { base_au: f64, rate_au_per_year: f64 },
    /// Linear recession counted from a fixed reference year instead of launch:
    /// `base + rate * (t + reference_year - launch_year)`
    EpochRecession {
        base_au: f64,
        rate_au_per_year: f64,
        reference_year: i32,
    },
    /// Interpolation from `origin` to `target`, reaching the target after `transfer_years`
    Transfer {
        origin_au: f64,
        target_au: f64,
        transfer_years: f64,
    },
    /// Eccentric solar orbit: `a (1 - swing cos phase)` with `a` the mean of
    /// perihelion and aphelion and the phase sweeping once per period
    Oscillation {
        perihelion_au: f64,
        aphelion_au: f64,
        period_years: f64,
        swing: f64,
    },
}

impl DistanceModel {
    /// Distance from the Sun in AU after `years` of flight
    pub fn distance_au(&self, years: f64, launch_year: i32) -> f64 {
        match *self {
            DistanceModel::Recession {
                base_au,
                rate_au_per_year,
            } => base_au + rate_au_per_year * years,
            DistanceModel::EpochRecession {
                base_au,
                rate_au_per_year,
                reference_year,
            } => base_au + rate_au_per_year * (years + (reference_year - launch_year) as f64),
            DistanceModel::Transfer {
                origin_au,
                target_au,
                transfer_years,
            } => {
                let progress = (years / transfer_years).min(1.0);
                origin_au + progress * (target_au - origin_au)
            }
            DistanceModel::Oscillation {
                perihelion_au,
                aphelion_au,
                period_years,
                swing,
            } => {
                let phase = years.rem_euclid(period_years) / period_years * TAU;
                (perihelion_au + aphelion_au) / 2.0 * (1.0 - swing * phase.cos())
            }
        }
    }
}

/// When a probe stops following its distance model and sits at the target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleRule {
    /// Once the arrival date has passed
    OnArrival,
    /// Once arrived, or from the start for orbiters
    OnArrivalOrOrbiter,
    /// Landers and rovers, from the start
    OnSurface,
}

impl SettleRule {
    pub fn applies(&self, trajectory: TrajectoryType, has_arrived: bool) -> bool {
        match self {
            SettleRule::OnArrival => has_arrived,
            SettleRule::OnArrivalOrOrbiter => has_arrived || trajectory == TrajectoryType::Orbiter,
            SettleRule::OnSurface => trajectory.is_surface(),
        }
    }
}

/// Fixed heliocentric distance a probe settles at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settling {
    pub rule: SettleRule,
    pub distance_au: f64,
}

/// Heliocentric speed estimate
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpeedModel {
    /// Vis-viva at the current distance on a fixed solar orbit
    SolarOrbit { semi_major_axis_au: f64 },
    /// Launch speed with a small empirical loss, for probes leaving the solar system
    Coasting { default_launch_speed_km_s: f64 },
    /// Fixed speed
    Constant { speed_km_s: f64 },
    /// `base + rate * t`
    Drift { base_km_s: f64, rate_km_s_per_year: f64 },
    /// Cascade for probes heading to a destination, first match wins:
    /// 1. orbiters take the target's speed when `match_target_speed` and a target state is known
    /// 2. landers and rovers take `surface_speed_km_s`, else the reference body's speed
    /// 3. arrived probes take `arrival_speed_km_s`
    /// 4. otherwise vis-viva on a transfer orbit from 1 AU to the current distance
    Transfer {
        match_target_speed: bool,
        surface_speed_km_s: Option<f64>,
        arrival_speed_km_s: Option<f64>,
    },
}

/// Everything the speed models may consult
#[derive(Debug, Clone, Copy)]
pub struct SpeedInputs<'a> {
    pub distance_au: f64,
    pub years_since_launch: f64,
    pub launch_speed_km_s: Option<f64>,
    pub trajectory: TrajectoryType,
    pub has_arrived: bool,
    pub target: Option<&'a StateVector>,
    pub reference: Option<&'a StateVector>,
}

impl SpeedModel {
    /// Heliocentric speed in km/s
    pub fn speed_km_s(&self, inputs: &SpeedInputs<'_>) -> f64 {
        match *self {
            SpeedModel::SolarOrbit { semi_major_axis_au } => {
                vis_viva_speed(inputs.distance_au, semi_major_axis_au)
            }
            SpeedModel::Coasting {
                default_launch_speed_km_s,
            } => inputs.launch_speed_km_s.unwrap_or(default_launch_speed_km_s) * COASTING_RETENTION,
            SpeedModel::Constant { speed_km_s } => speed_km_s,
            SpeedModel::Drift {
                base_km_s,
                rate_km_s_per_year,
            } => base_km_s + rate_km_s_per_year * inputs.years_since_launch,
            SpeedModel::Transfer {
                match_target_speed,
                surface_speed_km_s,
                arrival_speed_km_s,
            } => {
                if let (true, TrajectoryType::Orbiter, Some(target)) =
                    (match_target_speed, inputs.trajectory, inputs.target)
                {
                    target.speed_rel_sun
                } else if inputs.trajectory.is_surface() {
                    surface_speed_km_s
                        .or_else(|| inputs.reference.map(|r| r.speed_rel_sun))
                        .unwrap_or(FALLBACK_SPEED_KM_S)
                } else if inputs.has_arrived {
                    arrival_speed_km_s.unwrap_or(FALLBACK_SPEED_KM_S)
                } else {
                    let a = (1.0 + inputs.distance_au) / 2.0;
                    vis_viva_speed(inputs.distance_au, a)
                }
            }
        }
    }
}

/// Estimation parameters for one class of mission
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MissionProfile {
    pub distance: DistanceModel,
    pub settle: Option<Settling>,
    pub speed: SpeedModel,
    /// Catalog planet whose position stands in for the target, if any
    pub target_planet: Option<&'static str>,
}

impl MissionProfile {
    /// Look up the profile for a status and target body (case-insensitive)
    pub fn lookup(status: MissionStatus, target_body: &str) -> &'static MissionProfile {
        let key = target_body.trim().to_lowercase();
        match status {
            MissionStatus::Active => ACTIVE_PROFILES.get(&key).unwrap_or(&DEFAULT_ACTIVE),
            MissionStatus::Inactive => INACTIVE_PROFILES.get(&key).unwrap_or(&DEFAULT_INACTIVE),
        }
    }

    /// Heliocentric distance, honouring the settle rule
    pub fn distance_au(
        &self,
        years: f64,
        launch_year: i32,
        trajectory: TrajectoryType,
        has_arrived: bool,
    ) -> f64 {
        match self.settle {
            Some(s) if s.rule.applies(trajectory, has_arrived) => s.distance_au,
            _ => self.distance.distance_au(years, launch_year),
        }
    }
}

const fn transfer(target_au: f64, transfer_years: f64) -> DistanceModel {
    DistanceModel::Transfer {
        origin_au: 1.0,
        target_au,
        transfer_years,
    }
}

const fn recession(base_au: f64, rate_au_per_year: f64) -> DistanceModel {
    DistanceModel::Recession {
        base_au,
        rate_au_per_year,
    }
}

const fn cruise(
    match_target_speed: bool,
    surface: Option<f64>,
    arrival: Option<f64>,
) -> SpeedModel {
    SpeedModel::Transfer {
        match_target_speed,
        surface_speed_km_s: surface,
        arrival_speed_km_s: arrival,
    }
}

const INACTIVE_DRIFT: SpeedModel = SpeedModel::Drift {
    base_km_s: 10.0,
    rate_km_s_per_year: 0.1,
};

// Mean orbital speeds of the destination planets in km/s
const JUPITER_SPEED: f64 = 13.1;
const SATURN_SPEED: f64 = 9.7;
const MARS_SPEED: f64 = 24.1;

/// Active missions keyed by target body
const ACTIVE_PROFILE_PAIRS: &[(&str, MissionProfile)] = &[
    (
        "Interstellar space",
        MissionProfile {
            distance: DistanceModel::EpochRecession {
                base_au: 40.0,
                rate_au_per_year: 3.6,
                reference_year: 1977,
            },
            settle: None,
            speed: SpeedModel::Coasting {
                default_launch_speed_km_s: 16.5,
            },
            target_planet: None,
        },
    ),
    (
        "Jupiter",
        MissionProfile {
            distance: transfer(5.2, 6.0),
            settle: Some(Settling {
                rule: SettleRule::OnArrivalOrOrbiter,
                distance_au: 5.2,
            }),
            speed: cruise(true, Some(JUPITER_SPEED), Some(JUPITER_SPEED)),
            target_planet: Some("Jupiter"),
        },
    ),
    (
        "Saturn",
        MissionProfile {
            distance: transfer(9.5, 7.0),
            settle: Some(Settling {
                rule: SettleRule::OnArrival,
                distance_au: 9.5,
            }),
            speed: cruise(true, None, Some(SATURN_SPEED)),
            target_planet: Some("Saturn"),
        },
    ),
    (
        "Mars",
        MissionProfile {
            distance: transfer(1.5, 0.55),
            settle: Some(Settling {
                rule: SettleRule::OnSurface,
                distance_au: 1.5,
            }),
            speed: cruise(true, Some(MARS_SPEED), Some(MARS_SPEED)),
            target_planet: Some("Mars"),
        },
    ),
    (
        "Sun",
        MissionProfile {
            distance: DistanceModel::Oscillation {
                perihelion_au: 0.046,
                aphelion_au: 0.73,
                period_years: 0.24,
                swing: 0.88,
            },
            settle: None,
            speed: SpeedModel::SolarOrbit {
                semi_major_axis_au: (0.046 + 0.73) / 2.0,
            },
            target_planet: None,
        },
    ),
    (
        "Europa",
        MissionProfile {
            distance: transfer(5.2, 6.0),
            settle: None,
            speed: cruise(false, None, None),
            target_planet: Some("Jupiter"),
        },
    ),
    (
        "Trojan asteroids",
        MissionProfile {
            distance: transfer(5.2, 12.0),
            settle: None,
            speed: cruise(false, None, None),
            target_planet: None,
        },
    ),
    (
        "Kuiper Belt",
        MissionProfile {
            distance: recession(30.0, 1.0),
            settle: None,
            speed: SpeedModel::Constant { speed_km_s: 14.5 },
            target_planet: None,
        },
    ),
];

/// Inactive missions keyed by target body
const INACTIVE_PROFILE_PAIRS: &[(&str, MissionProfile)] = &[
    (
        "Jupiter",
        MissionProfile {
            distance: recession(5.2, 0.1),
            settle: None,
            speed: INACTIVE_DRIFT,
            target_planet: Some("Jupiter"),
        },
    ),
    (
        "Saturn",
        MissionProfile {
            distance: recession(9.5, 0.1),
            settle: None,
            speed: INACTIVE_DRIFT,
            target_planet: Some("Saturn"),
        },
    ),
    (
        "Mars",
        MissionProfile {
            distance: recession(1.5, 0.05),
            settle: None,
            speed: INACTIVE_DRIFT,
            target_planet: Some("Mars"),
        },
    ),
    (
        "Interstellar space",
        MissionProfile {
            distance: recession(30.0, 2.0),
            settle: None,
            speed: SpeedModel::Coasting {
                default_launch_speed_km_s: 16.0,
            },
            target_planet: None,
        },
    ),
];

const DEFAULT_ACTIVE: MissionProfile = MissionProfile {
    distance: recession(1.0, 0.3),
    settle: None,
    speed: cruise(false, None, None),
    target_planet: None,
};

const DEFAULT_INACTIVE: MissionProfile = MissionProfile {
    distance: recession(1.0, 0.5),
    settle: None,
    speed: INACTIVE_DRIFT,
    target_planet: None,
};

lazy_static! {
    static ref ACTIVE_PROFILES: HashMap<String, MissionProfile> = ACTIVE_PROFILE_PAIRS
        .iter()
        .map(|&(target, profile)| (target.to_lowercase(), profile))
        .collect();

    static ref INACTIVE_PROFILES: HashMap<String, MissionProfile> = INACTIVE_PROFILE_PAIRS
        .iter()
        .map(|&(target, profile)| (target.to_lowercase(), profile))
        .collect();
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_lookup_is_case_insensitive_with_fallback() {
        let jupiter = MissionProfile::lookup(MissionStatus::Active, "jupiter");
        assert_eq!(jupiter.target_planet, Some("Jupiter"));
        assert_eq!(
            MissionProfile::lookup(MissionStatus::Active, " JUPITER "),
            jupiter
        );

        assert_eq!(
            MissionProfile::lookup(MissionStatus::Active, "Ceres"),
            &DEFAULT_ACTIVE
        );
        assert_eq!(
            MissionProfile::lookup(MissionStatus::Inactive, "Ceres"),
            &DEFAULT_INACTIVE
        );
    }

    #[rstest]
    #[case(0.0, 1.0)]
    #[case(3.0, 3.1)]
    #[case(6.0, 5.2)]
    #[case(20.0, 5.2)]
    fn test_transfer_progress_is_capped(#[case] years: f64, #[case] expected: f64) {
        let model = transfer(5.2, 6.0);
        assert_relative_eq!(model.distance_au(years, 2011), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_epoch_recession_counts_from_reference_year() {
        let model = DistanceModel::EpochRecession {
            base_au: 40.0,
            rate_au_per_year: 3.6,
            reference_year: 1977,
        };
        assert_relative_eq!(model.distance_au(0.0, 1977), 40.0);
        assert_relative_eq!(model.distance_au(10.0, 1977), 76.0, epsilon = 1e-12);
        assert_relative_eq!(model.distance_au(0.0, 1972), 40.0 + 3.6 * 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_oscillation_between_perihelion_and_aphelion() {
        let model = DistanceModel::Oscillation {
            perihelion_au: 0.046,
            aphelion_au: 0.73,
            period_years: 0.24,
            swing: 0.88,
        };
        let a = 0.388;
        assert_relative_eq!(model.distance_au(0.0, 2018), a * 0.12, epsilon = 1e-12);
        assert_relative_eq!(model.distance_au(0.12, 2018), a * 1.88, epsilon = 1e-12);
        // Periodic
        assert_relative_eq!(
            model.distance_au(0.05, 2018),
            model.distance_au(0.05 + 0.24 * 7.0, 2018),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_settle_rules() {
        use TrajectoryType::*;
        assert!(SettleRule::OnArrival.applies(Flyby, true));
        assert!(!SettleRule::OnArrival.applies(Orbiter, false));
        assert!(SettleRule::OnArrivalOrOrbiter.applies(Orbiter, false));
        assert!(!SettleRule::OnArrivalOrOrbiter.applies(Flyby, false));
        assert!(SettleRule::OnSurface.applies(Rover, false));
        assert!(SettleRule::OnSurface.applies(Lander, false));
        assert!(!SettleRule::OnSurface.applies(Orbiter, true));
    }

    fn inputs(trajectory: TrajectoryType, has_arrived: bool) -> SpeedInputs<'static> {
        SpeedInputs {
            distance_au: 3.0,
            years_since_launch: 2.0,
            launch_speed_km_s: Some(13.0),
            trajectory,
            has_arrived,
            target: None,
            reference: None,
        }
    }

    #[test]
    fn test_transfer_cascade() {
        let model = cruise(true, None, Some(SATURN_SPEED));

        let en_route = model.speed_km_s(&inputs(TrajectoryType::Flyby, false));
        assert_relative_eq!(en_route, vis_viva_speed(3.0, 2.0), epsilon = 1e-12);

        let arrived = model.speed_km_s(&inputs(TrajectoryType::Flyby, true));
        assert_eq!(arrived, SATURN_SPEED);

        // Rover with no surface speed and no reference body
        assert_eq!(
            model.speed_km_s(&inputs(TrajectoryType::Rover, true)),
            FALLBACK_SPEED_KM_S
        );

        let reference = StateVector::from_vectors(
            nalgebra::Point3::new(1.0, 0.0, 0.0),
            nalgebra::Vector3::new(0.0, 29.5, 0.0),
        );
        let with_reference = SpeedInputs {
            reference: Some(&reference),
            ..inputs(TrajectoryType::Lander, false)
        };
        assert_eq!(model.speed_km_s(&with_reference), 29.5);
    }

    #[test]
    fn test_orbiter_takes_target_speed_only_when_enabled() {
        let target = StateVector::from_vectors(
            nalgebra::Point3::new(5.0, 0.0, 0.0),
            nalgebra::Vector3::new(0.0, 13.4, 0.0),
        );
        let with_target = SpeedInputs {
            target: Some(&target),
            ..inputs(TrajectoryType::Orbiter, false)
        };
        assert_eq!(cruise(true, None, None).speed_km_s(&with_target), 13.4);
        assert_relative_eq!(
            cruise(false, None, None).speed_km_s(&with_target),
            vis_viva_speed(3.0, 2.0)
        );
    }

    #[test]
    fn test_coasting_and_drift() {
        let coasting = SpeedModel::Coasting {
            default_launch_speed_km_s: 16.0,
        };
        assert_eq!(
            coasting.speed_km_s(&inputs(TrajectoryType::Flyby, false)),
            13.0 * COASTING_RETENTION
        );
        let no_launch_speed = SpeedInputs {
            launch_speed_km_s: None,
            ..inputs(TrajectoryType::Flyby, false)
        };
        assert_eq!(coasting.speed_km_s(&no_launch_speed), 16.0 * COASTING_RETENTION);

        assert_relative_eq!(
            INACTIVE_DRIFT.speed_km_s(&inputs(TrajectoryType::Orbiter, true)),
            10.2,
            epsilon = 1e-12
        );
    }
}
