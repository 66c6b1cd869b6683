//! Built-in seed data: the eight planets, nine major moons and fifteen
//! spacecraft that left the Earth-Moon system
//!
//! Orbital elements are mean J2000.0 values. Spacecraft phases and arrival
//! dates reflect mission status as of 2024.

use super::records::{BodyClass, MoonRecord, PhysicalProperties, PlanetRecord};
use crate::planetlib::{MoonElements, OrbitalElements};
use crate::spacecraft::MissionStatus::{Active, Inactive};
use crate::spacecraft::TrajectoryType::{Flyby, Orbiter, Rover};
use crate::spacecraft::{MissionStatus, SpacecraftRecord, TrajectoryType};
use crate::time::{self, TimeError};

struct PlanetRow {
    name: &'static str,
    elements: OrbitalElements,
    radius_km: f64,
    mass_kg: f64,
    class: BodyClass,
    rotation_period_h: f64,
    density: f64,
    equatorial_radius_km: f64,
    polar_radius_km: f64,
    magnetic_field_ut: Option<f64>,
    pressure_pa: Option<f64>,
}

const fn elements(
    a: f64,
    e: f64,
    i: f64,
    period: f64,
    m0: f64,
    w0: f64,
    node0: f64,
) -> OrbitalElements {
    OrbitalElements {
        semi_major_axis_au: a,
        eccentricity: e,
        inclination_deg: i,
        orbital_period_years: period,
        mean_anomaly_0_deg: m0,
        perihelion_arg_0_deg: w0,
        ascending_node_0_deg: node0,
    }
}

const PLANETS: &[PlanetRow] = &[
    PlanetRow {
        name: "Mercury",
        elements: elements(0.387098, 0.205630, 7.005, 0.240846, 174.796, 29.124, 48.331),
        radius_km: 2439.7,
        mass_kg: 3.3011e23,
        class: BodyClass::TerrestrialPlanet,
        rotation_period_h: 1407.6,
        density: 5.427,
        equatorial_radius_km: 2439.7,
        polar_radius_km: 2439.7,
        magnetic_field_ut: Some(0.011),
        pressure_pa: None,
    },
    PlanetRow {
        name: "Venus",
        elements: elements(0.723332, 0.006772, 3.39458, 0.615198, 50.115, 76.680, 131.533),
        radius_km: 6051.8,
        mass_kg: 4.8675e24,
        class: BodyClass::TerrestrialPlanet,
        rotation_period_h: 5832.5,
        density: 5.243,
        equatorial_radius_km: 6051.8,
        polar_radius_km: 6051.8,
        magnetic_field_ut: None,
        pressure_pa: Some(9.2e6),
    },
    PlanetRow {
        name: "Earth",
        elements: elements(1.000000, 0.0167086, 0.00005, 1.000017, 358.617, 102.947, 0.0),
        radius_km: 6371.0,
        mass_kg: 5.97237e24,
        class: BodyClass::TerrestrialPlanet,
        rotation_period_h: 23.9345,
        density: 5.514,
        equatorial_radius_km: 6378.1,
        polar_radius_km: 6356.8,
        magnetic_field_ut: Some(31.0),
        pressure_pa: Some(101_325.0),
    },
    PlanetRow {
        name: "Mars",
        elements: elements(1.523679, 0.0934123, 1.85061, 1.8808158, 19.412, 336.040, 49.578),
        radius_km: 3389.5,
        mass_kg: 6.4171e23,
        class: BodyClass::TerrestrialPlanet,
        rotation_period_h: 24.6229,
        density: 3.933,
        equatorial_radius_km: 3396.2,
        polar_radius_km: 3376.2,
        magnetic_field_ut: Some(0.021),
        pressure_pa: Some(600.0),
    },
    PlanetRow {
        name: "Jupiter",
        elements: elements(5.20260, 0.048498, 1.30530, 11.862615, 20.020, 14.753, 100.556),
        radius_km: 69_911.0,
        mass_kg: 1.8982e27,
        class: BodyClass::GasGiant,
        rotation_period_h: 9.925,
        density: 1.326,
        equatorial_radius_km: 71_492.0,
        polar_radius_km: 66_854.0,
        magnetic_field_ut: Some(417.0),
        pressure_pa: Some(2e5),
    },
    PlanetRow {
        name: "Saturn",
        elements: elements(9.55491, 0.055546, 2.48446, 29.4571, 317.020, 92.431, 113.715),
        radius_km: 58_232.0,
        mass_kg: 5.6834e26,
        class: BodyClass::GasGiant,
        rotation_period_h: 10.656,
        density: 0.687,
        equatorial_radius_km: 60_268.0,
        polar_radius_km: 54_364.0,
        magnetic_field_ut: Some(21.8),
        pressure_pa: Some(1.4e5),
    },
    PlanetRow {
        name: "Uranus",
        elements: elements(19.2184, 0.047168, 0.772556, 84.0205, 142.590, 170.964, 74.006),
        radius_km: 25_362.0,
        mass_kg: 8.6810e25,
        class: BodyClass::IceGiant,
        rotation_period_h: 17.24,
        density: 1.271,
        equatorial_radius_km: 25_559.0,
        polar_radius_km: 24_973.0,
        magnetic_field_ut: Some(23.0),
        pressure_pa: Some(1.2e5),
    },
    PlanetRow {
        name: "Neptune",
        elements: elements(30.0709, 0.008586, 1.76917, 164.7913, 256.228, 44.971, 131.784),
        radius_km: 24_622.0,
        mass_kg: 1.0241e26,
        class: BodyClass::IceGiant,
        rotation_period_h: 16.11,
        density: 1.638,
        equatorial_radius_km: 24_764.0,
        polar_radius_km: 24_341.0,
        magnetic_field_ut: Some(13.0),
        pressure_pa: Some(1.0e5),
    },
];

struct MoonRow {
    name: &'static str,
    parent: &'static str,
    a_km: f64,
    period_days: f64,
    inclination_deg: f64,
    radius_km: f64,
    mass_kg: f64,
    class: BodyClass,
    rotation_period_h: f64,
    density: f64,
    surface_temperature_k: f64,
    atmosphere: &'static str,
    pressure_pa: Option<f64>,
    magnetic_field_ut: Option<f64>,
}

const MOONS: &[MoonRow] = &[
    MoonRow {
        name: "Moon",
        parent: "Earth",
        a_km: 384_400.0,
        period_days: 27.321582,
        inclination_deg: 5.145,
        radius_km: 1737.4,
        mass_kg: 7.342e22,
        class: BodyClass::RegularSatellite,
        rotation_period_h: 655.72,
        density: 3.344,
        surface_temperature_k: 250.0,
        atmosphere: "Exosphere",
        pressure_pa: Some(1e-9),
        magnetic_field_ut: Some(120.0),
    },
    MoonRow {
        name: "Phobos",
        parent: "Mars",
        a_km: 9376.0,
        period_days: 0.31891023,
        inclination_deg: 1.093,
        radius_km: 11.1,
        mass_kg: 1.0659e16,
        class: BodyClass::IrregularSatellite,
        rotation_period_h: 7.66,
        density: 1.876,
        surface_temperature_k: 200.0,
        atmosphere: "No Atmosphere",
        pressure_pa: None,
        magnetic_field_ut: None,
    },
    MoonRow {
        name: "Deimos",
        parent: "Mars",
        a_km: 23_463.0,
        period_days: 1.26244,
        inclination_deg: 1.793,
        radius_km: 6.2,
        mass_kg: 1.4762e15,
        class: BodyClass::IrregularSatellite,
        rotation_period_h: 30.3,
        density: 1.471,
        surface_temperature_k: 234.0,
        atmosphere: "No Atmosphere",
        pressure_pa: None,
        magnetic_field_ut: None,
    },
    MoonRow {
        name: "Io",
        parent: "Jupiter",
        a_km: 421_700.0,
        period_days: 1.769137786,
        inclination_deg: 0.05,
        radius_km: 1821.6,
        mass_kg: 8.9319e22,
        class: BodyClass::RegularSatellite,
        rotation_period_h: 42.46,
        density: 3.528,
        surface_temperature_k: 110.0,
        atmosphere: "Sulfur-rich Atmosphere",
        pressure_pa: Some(0.01),
        magnetic_field_ut: Some(2000.0),
    },
    MoonRow {
        name: "Europa",
        parent: "Jupiter",
        a_km: 671_100.0,
        period_days: 3.551181041,
        inclination_deg: 0.47,
        radius_km: 1560.8,
        mass_kg: 4.7998e22,
        class: BodyClass::RegularSatellite,
        rotation_period_h: 85.23,
        density: 3.013,
        surface_temperature_k: 102.0,
        atmosphere: "Oxygen-rich Atmosphere",
        pressure_pa: Some(1e-6),
        magnetic_field_ut: Some(240.0),
    },
    MoonRow {
        name: "Ganymede",
        parent: "Jupiter",
        a_km: 1_070_400.0,
        period_days: 7.15455296,
        inclination_deg: 0.20,
        radius_km: 2634.1,
        mass_kg: 1.4819e23,
        class: BodyClass::RegularSatellite,
        rotation_period_h: 171.69,
        density: 1.936,
        surface_temperature_k: 110.0,
        atmosphere: "Oxygen-rich Atmosphere",
        pressure_pa: Some(1e-6),
        magnetic_field_ut: Some(719.0),
    },
    MoonRow {
        name: "Callisto",
        parent: "Jupiter",
        a_km: 1_882_700.0,
        period_days: 16.6890184,
        inclination_deg: 0.192,
        radius_km: 2410.3,
        mass_kg: 1.0759e23,
        class: BodyClass::RegularSatellite,
        rotation_period_h: 400.54,
        density: 1.834,
        surface_temperature_k: 134.0,
        atmosphere: "Oxygen-rich Atmosphere",
        pressure_pa: Some(1e-9),
        magnetic_field_ut: Some(417.0),
    },
    MoonRow {
        name: "Titan",
        parent: "Saturn",
        a_km: 1_221_870.0,
        period_days: 15.945,
        inclination_deg: 0.34854,
        radius_km: 2574.0,
        mass_kg: 1.3452e23,
        class: BodyClass::RegularSatellite,
        rotation_period_h: 382.68,
        density: 1.880,
        surface_temperature_k: 94.0,
        atmosphere: "Nitrogen-rich Atmosphere",
        pressure_pa: Some(146_700.0),
        magnetic_field_ut: Some(21.0),
    },
    MoonRow {
        name: "Enceladus",
        parent: "Saturn",
        a_km: 238_020.0,
        period_days: 1.370218,
        inclination_deg: 0.009,
        radius_km: 252.1,
        mass_kg: 1.08e20,
        class: BodyClass::RegularSatellite,
        rotation_period_h: 32.89,
        density: 1.609,
        surface_temperature_k: 75.0,
        atmosphere: "Water Vapor Atmosphere",
        pressure_pa: Some(0.01),
        magnetic_field_ut: None,
    },
];

// (name, launch date, target, status, trajectory, launch speed km/s, phase, arrival)
type SpacecraftRow = (
    &'static str,
    &'static str,
    &'static str,
    MissionStatus,
    TrajectoryType,
    f64,
    &'static str,
    Option<&'static str>,
);

const SPACECRAFT: &[SpacecraftRow] = &[
    ("Voyager 1", "1977-09-05", "Interstellar space", Active, Flyby, 16.6, "Interstellar", None),
    (
        "Voyager 2",
        "1977-08-20",
        "Interstellar space",
        Active,
        Flyby,
        16.3,
        "Interstellar",
        Some("1989-08-25"),
    ),
    (
        "Pioneer 10",
        "1972-03-02",
        "Interstellar space",
        Inactive,
        Flyby,
        14.3,
        "Lost contact 2003",
        Some("1983-06-13"),
    ),
    (
        "Pioneer 11",
        "1973-04-06",
        "Interstellar space",
        Inactive,
        Flyby,
        14.5,
        "Lost contact 1995",
        Some("1979-09-01"),
    ),
    (
        "Galileo",
        "1989-10-18",
        "Jupiter",
        Inactive,
        Orbiter,
        13.6,
        "Deorbited 2003",
        Some("1995-12-07"),
    ),
    (
        "Cassini-Huygens",
        "1997-10-15",
        "Saturn",
        Inactive,
        Orbiter,
        13.4,
        "Ended mission 2017",
        Some("2004-07-01"),
    ),
    (
        "New Horizons",
        "2006-01-19",
        "Kuiper Belt",
        Active,
        Flyby,
        16.3,
        "Kuiper Belt exploration",
        Some("2015-07-14"),
    ),
    (
        "Juno",
        "2011-08-05",
        "Jupiter",
        Active,
        Orbiter,
        13.1,
        "Orbital operations",
        Some("2016-07-04"),
    ),
    (
        "Curiosity",
        "2011-11-26",
        "Mars",
        Active,
        Rover,
        5.8,
        "Surface operations",
        Some("2012-08-06"),
    ),
    (
        "Perseverance",
        "2020-07-30",
        "Mars",
        Active,
        Rover,
        5.9,
        "Surface operations",
        Some("2021-02-18"),
    ),
    (
        "Zhurong",
        "2020-07-23",
        "Mars",
        Inactive,
        Rover,
        4.1,
        "Hibernated since May 2022",
        Some("2021-05-15"),
    ),
    (
        "Tianwen-1",
        "2020-07-23",
        "Mars",
        Active,
        Orbiter,
        11.2,
        "Orbital operations",
        Some("2021-02-10"),
    ),
    (
        "Lucy",
        "2021-10-16",
        "Trojan asteroids",
        Active,
        Flyby,
        12.9,
        "En route to Jupiter Trojans",
        Some("2033-03-03"),
    ),
    (
        "Europa Clipper",
        "2024-10-14",
        "Europa",
        Active,
        Orbiter,
        13.0,
        "En route to Jupiter",
        Some("2030-04-11"),
    ),
    ("Parker Solar Probe", "2018-08-12", "Sun", Active, Flyby, 12.0, "Solar observation", None),
];

pub fn planets() -> Vec<PlanetRecord> {
    PLANETS
        .iter()
        .map(|row| PlanetRecord {
            name: row.name.to_string(),
            elements: row.elements,
            properties: PhysicalProperties {
                class: Some(row.class),
                rotation_period_h: Some(row.rotation_period_h),
                density_g_cm3: Some(row.density),
                equatorial_radius_km: Some(row.equatorial_radius_km),
                polar_radius_km: Some(row.polar_radius_km),
                magnetic_field_ut: row.magnetic_field_ut,
                atmospheric_pressure_pa: row.pressure_pa,
                ..PhysicalProperties::new(row.radius_km, row.mass_kg)
            },
        })
        .collect()
}

pub fn moons() -> Vec<MoonRecord> {
    MOONS
        .iter()
        .map(|row| MoonRecord {
            name: row.name.to_string(),
            parent: row.parent.to_string(),
            elements: MoonElements {
                semi_major_axis_km: row.a_km,
                orbital_period_days: row.period_days,
                inclination_deg: row.inclination_deg,
            },
            properties: PhysicalProperties {
                class: Some(row.class),
                rotation_period_h: Some(row.rotation_period_h),
                density_g_cm3: Some(row.density),
                magnetic_field_ut: row.magnetic_field_ut,
                atmospheric_pressure_pa: row.pressure_pa,
                surface_temperature_k: Some(row.surface_temperature_k),
                atmosphere: Some(row.atmosphere.to_string()),
                ..PhysicalProperties::new(row.radius_km, row.mass_kg)
            },
        })
        .collect()
}

pub fn spacecraft() -> Result<Vec<SpacecraftRecord>, TimeError> {
    SPACECRAFT
        .iter()
        .map(
            |&(name, launch, target, status, trajectory, speed, phase, arrival)| {
                Ok(SpacecraftRecord {
                    name: name.to_string(),
                    launch_date: time::parse_date(launch)?.date_naive(),
                    target_body: target.to_string(),
                    status,
                    trajectory_type: trajectory,
                    launch_speed_km_s: Some(speed),
                    arrival_time: arrival.map(str::to_string),
                    current_phase: Some(phase.to_string()),
                })
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_counts() {
        assert_eq!(planets().len(), 8);
        assert_eq!(moons().len(), 9);
        assert_eq!(spacecraft().unwrap().len(), 15);
    }

    #[test]
    fn test_seed_elements_are_valid() {
        for planet in planets() {
            planet.elements.validate(&planet.name).unwrap();
        }
        for moon in moons() {
            moon.elements.validate(&moon.name).unwrap();
        }
    }

    #[test]
    fn test_every_moon_parent_is_seeded() {
        let names: Vec<String> = planets().into_iter().map(|p| p.name).collect();
        for moon in moons() {
            assert!(names.contains(&moon.parent), "{} has no parent", moon.name);
        }
    }

    #[test]
    fn test_seed_arrival_dates_parse() {
        for sc in spacecraft().unwrap() {
            if let Some(arrival) = sc.arrival_date() {
                assert!(arrival.is_ok(), "{} arrival does not parse", sc.name);
            }
        }
    }
}
