//! Body catalog module
//!
//! A [`Catalog`] holds the static records the position engines consume:
//! planets with their orbital elements, moons keyed to a parent planet, and
//! spacecraft mission records. Catalogs are validated once when they are
//! built or loaded; after that every record can be handed to the engines
//! without further checks.

pub mod builtin;
pub mod records;

pub use records::{BodyClass, MoonRecord, PhysicalProperties, PlanetRecord};

use crate::spacecraft::{MissionStatus, SpacecraftRecord, PHASE_ARRIVED, PHASE_EN_ROUTE};
use crate::{OrreryError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Validated collection of planets, moons and spacecraft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    planets: Vec<PlanetRecord>,
    #[serde(default)]
    moons: Vec<MoonRecord>,
    #[serde(default)]
    spacecraft: Vec<SpacecraftRecord>,
}

impl Catalog {
    /// Build a catalog, validating every record
    pub fn new(
        planets: Vec<PlanetRecord>,
        moons: Vec<MoonRecord>,
        spacecraft: Vec<SpacecraftRecord>,
    ) -> Result<Self> {
        let catalog = Self {
            planets,
            moons,
            spacecraft,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The built-in seed catalog
    pub fn builtin() -> Result<Self> {
        Self::new(builtin::planets(), builtin::moons(), builtin::spacecraft()?)
    }

    /// Parse and validate a catalog from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&text)?;
        log::info!(
            "Loaded catalog from {}: {} planets, {} moons, {} spacecraft",
            path.display(),
            catalog.planets.len(),
            catalog.moons.len(),
            catalog.spacecraft.len()
        );
        Ok(catalog)
    }

    /// Serialize as pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the catalog to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path.as_ref(), self.to_json_string()?)?;
        log::info!("Saved catalog to {}", path.as_ref().display());
        Ok(())
    }

    /// Check orbital elements, name uniqueness and moon parents
    ///
    /// Arrival dates that do not parse are not an error; they are logged and
    /// treated as "not yet arrived" during evaluation.
    pub fn validate(&self) -> Result<()> {
        let mut names = HashSet::new();
        let all_names = self
            .planets
            .iter()
            .map(|p| p.name.as_str())
            .chain(self.moons.iter().map(|m| m.name.as_str()))
            .chain(self.spacecraft.iter().map(|s| s.name.as_str()));
        for name in all_names {
            if name.trim().is_empty() {
                return Err(OrreryError::CatalogError("Empty body name".to_string()));
            }
            if !names.insert(name.to_lowercase()) {
                return Err(OrreryError::CatalogError(format!(
                    "Duplicate body name: {}",
                    name
                )));
            }
        }

        for planet in &self.planets {
            planet.elements.validate(&planet.name)?;
        }

        for moon in &self.moons {
            moon.elements.validate(&moon.name)?;
            if self.find_planet(&moon.parent).is_none() {
                return Err(OrreryError::CatalogError(format!(
                    "Moon {} has unknown parent planet {}",
                    moon.name, moon.parent
                )));
            }
        }

        for sc in &self.spacecraft {
            if let Some(Err(e)) = sc.arrival_date() {
                log::warn!("{}: arrival date will be ignored: {}", sc.name, e);
            }
        }

        Ok(())
    }

    pub fn planets(&self) -> &[PlanetRecord] {
        &self.planets
    }

    pub fn moons(&self) -> &[MoonRecord] {
        &self.moons
    }

    pub fn spacecraft(&self) -> &[SpacecraftRecord] {
        &self.spacecraft
    }

    /// Look up a planet by name (case-insensitive)
    pub fn planet(&self, name: &str) -> Result<&PlanetRecord> {
        self.find_planet(name)
            .ok_or_else(|| OrreryError::ObjectNotFound(name.to_string()))
    }

    /// Look up a moon by name (case-insensitive)
    pub fn moon(&self, name: &str) -> Result<&MoonRecord> {
        self.moons
            .iter()
            .find(|m| m.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| OrreryError::ObjectNotFound(name.to_string()))
    }

    /// Look up a spacecraft by name (case-insensitive)
    pub fn spacecraft_named(&self, name: &str) -> Result<&SpacecraftRecord> {
        self.spacecraft
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| OrreryError::ObjectNotFound(name.to_string()))
    }

    /// Moons orbiting the named planet, in catalog order
    pub fn moons_of<'a>(&'a self, planet: &'a str) -> impl Iterator<Item = &'a MoonRecord> + 'a {
        self.moons
            .iter()
            .filter(move |m| m.parent.eq_ignore_ascii_case(planet))
    }

    /// Insert a spacecraft, replacing any record with the same name
    ///
    /// Returns the replaced record, if there was one.
    pub fn upsert_spacecraft(
        &mut self,
        record: SpacecraftRecord,
    ) -> Result<Option<SpacecraftRecord>> {
        let clashes_with_body = self
            .planets
            .iter()
            .map(|p| &p.name)
            .chain(self.moons.iter().map(|m| &m.name))
            .any(|n| n.eq_ignore_ascii_case(&record.name));
        if clashes_with_body {
            return Err(OrreryError::CatalogError(format!(
                "Duplicate body name: {}",
                record.name
            )));
        }
        if let Some(Err(e)) = record.arrival_date() {
            log::warn!("{}: arrival date will be ignored: {}", record.name, e);
        }

        match self
            .spacecraft
            .iter_mut()
            .find(|s| s.name.eq_ignore_ascii_case(&record.name))
        {
            Some(existing) => Ok(Some(std::mem::replace(existing, record))),
            None => {
                self.spacecraft.push(record);
                Ok(None)
            }
        }
    }

    /// Update a spacecraft's status and, optionally, its phase label
    pub fn set_spacecraft_status(
        &mut self,
        name: &str,
        status: MissionStatus,
        phase: Option<&str>,
    ) -> Result<()> {
        let sc = self
            .spacecraft
            .iter_mut()
            .find(|s| s.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| OrreryError::ObjectNotFound(name.to_string()))?;
        sc.status = status;
        if let Some(phase) = phase {
            sc.current_phase = Some(phase.to_string());
        }
        log::debug!("{}: status set to {}", sc.name, status);
        Ok(())
    }

    /// Mark active en-route spacecraft whose arrival date has passed as arrived
    ///
    /// Returns the names of the records that changed.
    pub fn refresh_mission_phases(&mut self, when: &DateTime<Utc>) -> Vec<String> {
        let mut updated = Vec::new();
        for sc in self
            .spacecraft
            .iter_mut()
            .filter(|s| s.status == MissionStatus::Active)
        {
            match sc.arrival_date() {
                Some(Ok(arrival)) if arrival <= *when => {
                    if sc.current_phase.as_deref() == Some(PHASE_EN_ROUTE) {
                        sc.current_phase = Some(PHASE_ARRIVED.to_string());
                        log::info!("{}: {}", sc.name, PHASE_ARRIVED);
                        updated.push(sc.name.clone());
                    }
                }
                Some(Err(e)) => log::warn!("{}: cannot parse arrival date: {}", sc.name, e),
                _ => {}
            }
        }
        updated
    }

    fn find_planet(&self, name: &str) -> Option<&PlanetRecord> {
        self.planets.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }
}
