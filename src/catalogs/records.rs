//! Typed catalog records for planets and moons

use crate::planetlib::{MoonElements, OrbitalElements};
use serde::{Deserialize, Serialize};

/// Broad classification of a body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyClass {
    TerrestrialPlanet,
    GasGiant,
    IceGiant,
    RegularSatellite,
    IrregularSatellite,
}

impl BodyClass {
    pub fn label(&self) -> &'static str {
        match self {
            BodyClass::TerrestrialPlanet => "Terrestrial Planet",
            BodyClass::GasGiant => "Gas Giant",
            BodyClass::IceGiant => "Ice Giant",
            BodyClass::RegularSatellite => "Regular Satellite",
            BodyClass::IrregularSatellite => "Irregular Satellite",
        }
    }
}

/// Descriptive physical data, carried for display only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalProperties {
    /// Mean radius in km
    pub radius_km: f64,
    /// Mass in kg
    pub mass_kg: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<BodyClass>,
    /// Sidereal rotation period in hours
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation_period_h: Option<f64>,
    /// Mean density in g/cm³
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density_g_cm3: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equatorial_radius_km: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polar_radius_km: Option<f64>,
    /// Surface magnetic field in µT
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magnetic_field_ut: Option<f64>,
    /// Surface (or cloud-top) pressure in Pa, `None` when there is no atmosphere
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub atmospheric_pressure_pa: Option<f64>,
    /// Mean surface temperature in K
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface_temperature_k: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub atmosphere: Option<String>,
}

impl PhysicalProperties {
    /// Properties with only radius and mass known
    pub fn new(radius_km: f64, mass_kg: f64) -> Self {
        Self {
            radius_km,
            mass_kg,
            class: None,
            rotation_period_h: None,
            density_g_cm3: None,
            equatorial_radius_km: None,
            polar_radius_km: None,
            magnetic_field_ut: None,
            atmospheric_pressure_pa: None,
            surface_temperature_k: None,
            atmosphere: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetRecord {
    pub name: String,
    pub elements: OrbitalElements,
    pub properties: PhysicalProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoonRecord {
    pub name: String,
    /// Name of the parent planet
    pub parent: String,
    pub elements: MoonElements,
    pub properties: PhysicalProperties,
}
