//! Heuristic spacecraft position estimator
//!
//! This is an illustrative approximation, not a trajectory integrator. Each
//! mission is classified by status, target body and trajectory type into a
//! [`MissionProfile`](profiles::MissionProfile) that yields a heliocentric
//! distance and speed. The direction is synthesized from the elapsed time so
//! that probes spread around the Sun in a plot; it carries no physical
//! meaning.

pub mod profiles;

use crate::constants::{SPACECRAFT_TILT, TAU};
use crate::planetlib::StateVector;
use crate::time::{self, TimeError};
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use std::fmt;

pub use profiles::{DistanceModel, MissionProfile, SettleRule, SpeedModel};

/// Operational status of a mission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissionStatus {
    Active,
    Inactive,
}

impl fmt::Display for MissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissionStatus::Active => write!(f, "active"),
            MissionStatus::Inactive => write!(f, "inactive"),
        }
    }
}

/// Kind of trajectory a mission flies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrajectoryType {
    Flyby,
    Orbiter,
    Lander,
    Rover,
}

impl TrajectoryType {
    /// Landers and rovers share their target's motion once down
    pub fn is_surface(&self) -> bool {
        matches!(self, TrajectoryType::Lander | TrajectoryType::Rover)
    }
}

impl fmt::Display for TrajectoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TrajectoryType::Flyby => "flyby",
            TrajectoryType::Orbiter => "orbiter",
            TrajectoryType::Lander => "lander",
            TrajectoryType::Rover => "rover",
        };
        write!(f, "{}", name)
    }
}

/// Catalog entry for one spacecraft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpacecraftRecord {
    pub name: String,
    /// Launch date (midnight UTC)
    pub launch_date: NaiveDate,
    pub target_body: String,
    pub status: MissionStatus,
    pub trajectory_type: TrajectoryType,
    /// Launch speed relative to Earth in km/s
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_speed_km_s: Option<f64>,
    /// Arrival date or expected arrival date, as free text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_phase: Option<String>,
}

/// Phase label stored for probes still travelling
pub const PHASE_EN_ROUTE: &str = "En route";
/// Phase label reported once an en-route probe has arrived
pub const PHASE_ARRIVED: &str = "Arrived";

impl SpacecraftRecord {
    /// Launch instant, midnight UTC on the launch date
    pub fn launched_at(&self) -> DateTime<Utc> {
        time::start_of_day(self.launch_date)
    }

    /// Parsed arrival date, `None` when no arrival is recorded
    pub fn arrival_date(&self) -> Option<Result<DateTime<Utc>, TimeError>> {
        self.arrival_time.as_deref().map(time::parse_date)
    }

    /// True iff an arrival date is recorded, parses, and is not after `when`
    ///
    /// Unparsable text counts as not arrived.
    pub fn has_arrived(&self, when: &DateTime<Utc>) -> bool {
        matches!(self.arrival_date(), Some(Ok(arrival)) if arrival <= *when)
    }

    /// Julian years since launch, zero before launch
    pub fn years_since_launch(&self, when: &DateTime<Utc>) -> f64 {
        time::years_between(&self.launched_at(), when).max(0.0)
    }

    /// Mission profile this record is classified into
    pub fn profile(&self) -> &'static MissionProfile {
        MissionProfile::lookup(self.status, &self.target_body)
    }

    /// Catalog planet standing in for the target body, if any
    pub fn target_planet(&self) -> Option<&'static str> {
        self.profile().target_planet
    }

    /// Mission phase at `when`
    ///
    /// An active probe recorded as en route reports as arrived once its
    /// arrival date has passed; every other phase is returned unchanged.
    pub fn current_phase(&self, when: &DateTime<Utc>) -> Option<&str> {
        match self.current_phase.as_deref() {
            Some(PHASE_EN_ROUTE)
                if self.status == MissionStatus::Active && self.has_arrived(when) =>
            {
                Some(PHASE_ARRIVED)
            }
            phase => phase,
        }
    }
}

/// Optional context for a spacecraft estimate
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimateContext<'a> {
    /// State of the target body at the same instant
    pub target: Option<&'a StateVector>,
    /// State of the reference body (Earth) at the same instant
    pub reference: Option<&'a StateVector>,
}

/// Estimate the heliocentric state of a spacecraft
pub fn estimate_state(
    record: &SpacecraftRecord,
    context: EstimateContext<'_>,
    when: &DateTime<Utc>,
) -> StateVector {
    let years = record.years_since_launch(when);
    let has_arrived = record.has_arrived(when);
    let profile = record.profile();

    let distance = profile.distance_au(
        years,
        record.launch_date.year(),
        record.trajectory_type,
        has_arrived,
    );

    let speed = profile.speed.speed_km_s(&profiles::SpeedInputs {
        distance_au: distance,
        years_since_launch: years,
        launch_speed_km_s: record.launch_speed_km_s,
        trajectory: record.trajectory_type,
        has_arrived,
        target: context.target,
        reference: context.reference,
    });

    log::debug!(
        "{}: {:.3} years since launch, arrived={}, d={:.3} AU, v={:.2} km/s",
        record.name,
        years,
        has_arrived,
        distance,
        speed
    );

    synthesize_state(years, distance, speed)
}

/// Place a probe for plotting: one revolution per year of flight, slightly tilted
pub fn synthesize_state(years: f64, distance_au: f64, speed_km_s: f64) -> StateVector {
    let angle = (years * TAU).rem_euclid(TAU);
    let (sin_a, cos_a) = angle.sin_cos();

    StateVector {
        position: Point3::new(
            distance_au * cos_a,
            distance_au * sin_a,
            distance_au * SPACECRAFT_TILT * sin_a,
        ),
        velocity: Vector3::new(-speed_km_s * sin_a, speed_km_s * cos_a, 0.0),
        distance_from_sun: distance_au,
        speed_rel_sun: speed_km_s,
    }
}

/// Straight-line distance in AU between a spacecraft and its target
pub fn distance_to_target(spacecraft: &Point3<f64>, target: &Point3<f64>) -> f64 {
    (spacecraft - target).norm()
}
