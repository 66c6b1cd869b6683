//! Whole-catalog evaluation at one instant
//!
//! Planets are evaluated first and their states kept by name, so every moon
//! and every spacecraft target reuses the parent's state instead of solving
//! Kepler's equation again.

use crate::catalogs::Catalog;
use crate::planetlib::{Ephemeris, StateVector};
use crate::relative::{relative_motion, RelativeMotion};
use crate::spacecraft::{self, EstimateContext, MissionStatus, TrajectoryType};
use crate::time;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Name of the body all relative metrics are measured from
pub const REFERENCE_BODY: &str = "Earth";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoonSnapshot {
    pub name: String,
    pub parent: String,
    pub state: StateVector,
    pub relative_to_earth: Option<RelativeMotion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetSnapshot {
    pub name: String,
    pub semi_major_axis_au: f64,
    pub state: StateVector,
    /// `None` for the reference body itself
    pub relative_to_earth: Option<RelativeMotion>,
    /// Moons ordered by distance from the planet
    pub moons: Vec<MoonSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpacecraftSnapshot {
    pub name: String,
    pub target_body: String,
    pub status: MissionStatus,
    pub trajectory_type: TrajectoryType,
    pub launch_date: NaiveDate,
    pub years_since_launch: f64,
    pub has_arrived: bool,
    pub current_phase: Option<String>,
    pub state: StateVector,
    pub relative_to_earth: Option<RelativeMotion>,
    /// Distance to the target planet in AU, for active probes still en route
    pub target_distance_au: Option<f64>,
}

/// State of every catalog body at one instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub timestamp: DateTime<Utc>,
    pub julian_date: f64,
    /// Planets ordered by semi-major axis
    pub planets: Vec<PlanetSnapshot>,
    /// Active spacecraft first, then inactive, each group in launch order
    pub spacecraft: Vec<SpacecraftSnapshot>,
    pub inactive_count: usize,
}

impl Snapshot {
    /// Evaluate every body of `catalog` at `when`
    pub fn evaluate(catalog: &Catalog, ephemeris: &Ephemeris, when: &DateTime<Utc>) -> Self {
        let mut planet_records: Vec<_> = catalog.planets().iter().collect();
        planet_records.sort_by(|a, b| {
            a.elements
                .semi_major_axis_au
                .total_cmp(&b.elements.semi_major_axis_au)
        });

        let states: HashMap<&str, StateVector> = planet_records
            .iter()
            .map(|p| (p.name.as_str(), ephemeris.planet_state(&p.elements, when)))
            .collect();

        let state_of = |body: &str| {
            states
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(body))
                .map(|(_, state)| *state)
        };

        let earth = state_of(REFERENCE_BODY);
        if earth.is_none() {
            log::warn!("No {} in catalog, relative metrics omitted", REFERENCE_BODY);
        }
        let relative = |state: &StateVector| earth.as_ref().map(|e| relative_motion(state, e));

        let planets = planet_records
            .iter()
            .map(|planet| {
                let state = states[planet.name.as_str()];

                let mut moon_records: Vec<_> = catalog.moons_of(&planet.name).collect();
                moon_records.sort_by(|a, b| {
                    a.elements
                        .semi_major_axis_km
                        .total_cmp(&b.elements.semi_major_axis_km)
                });
                let moons = moon_records
                    .into_iter()
                    .map(|moon| {
                        let moon_state = ephemeris.moon_state(&moon.elements, &state, when);
                        MoonSnapshot {
                            name: moon.name.clone(),
                            parent: planet.name.clone(),
                            state: moon_state,
                            relative_to_earth: relative(&moon_state),
                        }
                    })
                    .collect();

                let is_reference = planet.name.eq_ignore_ascii_case(REFERENCE_BODY);
                PlanetSnapshot {
                    name: planet.name.clone(),
                    semi_major_axis_au: planet.elements.semi_major_axis_au,
                    state,
                    relative_to_earth: if is_reference { None } else { relative(&state) },
                    moons,
                }
            })
            .collect();

        let mut craft: Vec<_> = catalog.spacecraft().iter().collect();
        craft.sort_by_key(|sc| (sc.status != MissionStatus::Active, sc.launch_date));

        let spacecraft: Vec<SpacecraftSnapshot> = craft
            .into_iter()
            .map(|sc| {
                let target = sc.target_planet().and_then(state_of);
                let state = spacecraft::estimate_state(
                    sc,
                    EstimateContext {
                        target: target.as_ref(),
                        reference: earth.as_ref(),
                    },
                    when,
                );
                let has_arrived = sc.has_arrived(when);

                let target_distance_au = match (sc.status, has_arrived, target) {
                    (MissionStatus::Active, false, Some(target)) => Some(
                        spacecraft::distance_to_target(&state.position, &target.position),
                    ),
                    _ => None,
                };

                SpacecraftSnapshot {
                    name: sc.name.clone(),
                    target_body: sc.target_body.clone(),
                    status: sc.status,
                    trajectory_type: sc.trajectory_type,
                    launch_date: sc.launch_date,
                    years_since_launch: sc.years_since_launch(when),
                    has_arrived,
                    current_phase: sc.current_phase(when).map(str::to_string),
                    state,
                    relative_to_earth: relative(&state),
                    target_distance_au,
                }
            })
            .collect();

        let inactive_count = spacecraft
            .iter()
            .filter(|sc| sc.status == MissionStatus::Inactive)
            .count();

        log::debug!(
            "Evaluated {} planets and {} spacecraft at JD {:.5}",
            states.len(),
            spacecraft.len(),
            time::julian_date(when)
        );

        Self {
            timestamp: *when,
            julian_date: time::julian_date(when),
            planets,
            spacecraft,
            inactive_count,
        }
    }

    /// State of any body in the snapshot by name (case-insensitive)
    pub fn find(&self, name: &str) -> Option<&StateVector> {
        for planet in &self.planets {
            if planet.name.eq_ignore_ascii_case(name) {
                return Some(&planet.state);
            }
            if let Some(moon) = planet.moons.iter().find(|m| m.name.eq_ignore_ascii_case(name)) {
                return Some(&moon.state);
            }
        }
        self.spacecraft
            .iter()
            .find(|sc| sc.name.eq_ignore_ascii_case(name))
            .map(|sc| &sc.state)
    }

    /// Serialize as pretty-printed JSON
    pub fn to_json_string(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogs::builtin;
    use crate::time::utc;
    use approx::assert_relative_eq;

    fn snapshot_at(when: &DateTime<Utc>) -> Snapshot {
        let catalog = Catalog::builtin().unwrap();
        Snapshot::evaluate(&catalog, &Ephemeris::new(), when)
    }

    #[test]
    fn test_planets_sorted_by_distance() {
        let snap = snapshot_at(&utc(2024, 3, 15, 6, 30, 15).unwrap());
        let names: Vec<&str> = snap.planets.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune"]
        );
        assert_relative_eq!(snap.julian_date, 2460384.7710069446, epsilon = 1e-6);
    }

    #[test]
    fn test_earth_has_no_relative_metrics() {
        let snap = snapshot_at(&utc(2024, 1, 1, 0, 0, 0).unwrap());
        let earth = snap.planets.iter().find(|p| p.name == "Earth").unwrap();
        assert!(earth.relative_to_earth.is_none());
        let mars = snap.planets.iter().find(|p| p.name == "Mars").unwrap();
        let rel = mars.relative_to_earth.unwrap();
        assert!(rel.distance_au > 0.3 && rel.distance_au < 2.7);
    }

    #[test]
    fn test_moons_follow_parent_and_sort_by_orbit() {
        let snap = snapshot_at(&utc(2024, 1, 1, 0, 0, 0).unwrap());
        let jupiter = snap.planets.iter().find(|p| p.name == "Jupiter").unwrap();
        let names: Vec<&str> = jupiter.moons.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Io", "Europa", "Ganymede", "Callisto"]);
        for moon in &jupiter.moons {
            let offset = (moon.state.position - jupiter.state.position).norm();
            assert!(offset < 0.02, "{} is {} AU from Jupiter", moon.name, offset);
            assert_eq!(moon.parent, "Jupiter");
        }

        let earth = snap.planets.iter().find(|p| p.name == "Earth").unwrap();
        let luna = &earth.moons[0];
        let rel = luna.relative_to_earth.unwrap();
        assert_relative_eq!(
            rel.distance_au,
            384_400.0 / crate::constants::AU_KM,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_spacecraft_order_and_inactive_count() {
        let snap = snapshot_at(&utc(2025, 6, 1, 0, 0, 0).unwrap());
        assert_eq!(snap.spacecraft.len(), 15);
        assert_eq!(snap.inactive_count, 5);

        let first_inactive = snap
            .spacecraft
            .iter()
            .position(|sc| sc.status == MissionStatus::Inactive)
            .unwrap();
        assert_eq!(first_inactive, 15 - 5);
        assert!(snap.spacecraft[first_inactive..]
            .iter()
            .all(|sc| sc.status == MissionStatus::Inactive));

        for group in [&snap.spacecraft[..first_inactive], &snap.spacecraft[first_inactive..]] {
            assert!(group.windows(2).all(|w| w[0].launch_date <= w[1].launch_date));
        }
        assert_eq!(snap.spacecraft[0].name, "Voyager 2");
    }

    #[test]
    fn test_target_distance_only_for_en_route_probes() {
        let snap = snapshot_at(&utc(2025, 6, 1, 0, 0, 0).unwrap());
        let get = |name: &str| snap.spacecraft.iter().find(|sc| sc.name == name).unwrap();

        // Europa Clipper resolves to Jupiter and is still travelling
        let clipper = get("Europa Clipper");
        assert!(!clipper.has_arrived);
        assert!(clipper.target_distance_au.is_some());

        // Arrived, or no planet to aim at
        assert!(get("Juno").target_distance_au.is_none());
        assert!(get("Lucy").target_distance_au.is_none());
        assert!(get("Parker Solar Probe").target_distance_au.is_none());
        // Inactive
        assert!(get("Galileo").target_distance_au.is_none());
    }

    #[test]
    fn test_juno_matches_jupiter_speed() {
        let snap = snapshot_at(&utc(2025, 6, 1, 0, 0, 0).unwrap());
        let jupiter = snap.planets.iter().find(|p| p.name == "Jupiter").unwrap();
        let juno = snap.find("juno").unwrap();
        assert_eq!(juno.speed_rel_sun, jupiter.state.speed_rel_sun);
        assert_eq!(juno.distance_from_sun, 5.2);
    }

    #[test]
    fn test_target_planet_resolves_regardless_of_case() {
        let mut planets = builtin::planets();
        for planet in &mut planets {
            planet.name = planet.name.to_lowercase();
        }
        let clipper = builtin::spacecraft()
            .unwrap()
            .into_iter()
            .filter(|sc| sc.name == "Europa Clipper")
            .collect();
        let catalog = Catalog::new(planets, vec![], clipper).unwrap();

        let when = utc(2025, 6, 1, 0, 0, 0).unwrap();
        let snap = Snapshot::evaluate(&catalog, &Ephemeris::new(), &when);
        let jupiter = snap.find("jupiter").copied().unwrap();
        let clipper = &snap.spacecraft[0];

        assert_eq!(
            clipper.target_distance_au,
            Some(spacecraft::distance_to_target(&clipper.state.position, &jupiter.position))
        );
        assert!(clipper.relative_to_earth.is_some());
    }

    #[test]
    fn test_find_any_body() {
        let snap = snapshot_at(&utc(2025, 6, 1, 0, 0, 0).unwrap());
        assert!(snap.find("Titan").is_some());
        assert!(snap.find("neptune").is_some());
        assert!(snap.find("Voyager 1").is_some());
        assert!(snap.find("Pluto").is_none());
    }

    #[test]
    fn test_snapshot_json() {
        let snap = snapshot_at(&utc(2025, 6, 1, 0, 0, 0).unwrap());
        let json = snap.to_json_string().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["inactive_count"], 5);
        assert_eq!(value["planets"].as_array().unwrap().len(), 8);
    }
}
