//! Orrery: heliocentric position estimates for planets, moons and spacecraft
//!
//! Planets are propagated from static J2000.0 Keplerian elements, moons ride
//! circular orbits around their parent planet, and spacecraft positions come
//! from a heuristic mission-profile model. Everything is evaluated at a single
//! instant; there is no time stepping and nothing is cached between calls.
//!
//! ```no_run
//! use orrery::{CatalogLoader, Ephemeris, Snapshot};
//!
//! let catalog = CatalogLoader::new().load()?;
//! let snapshot = Snapshot::evaluate(&catalog, &Ephemeris::new(), &chrono::Utc::now());
//! for planet in &snapshot.planets {
//!     println!("{}: {:.3} AU", planet.name, planet.state.distance_from_sun);
//! }
//! # Ok::<(), orrery::OrreryError>(())
//! ```

use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod catalogs;
pub mod constants;
pub mod format;
pub mod kepler;
pub mod planetlib;
pub mod relative;
pub mod snapshot;
pub mod spacecraft;
pub mod time;

// Re-export commonly used types
pub use catalogs::Catalog;
pub use kepler::{KeplerSolution, KeplerSolver};
pub use planetlib::{Ephemeris, InvalidOrbitalElements, MoonElements, OrbitalElements, StateVector};
pub use relative::{relative_motion, RelativeMotion};
pub use snapshot::Snapshot;
pub use spacecraft::{MissionStatus, SpacecraftRecord, TrajectoryType};

/// Environment variable naming a catalog JSON file to load instead of the
/// built-in catalog
pub const CATALOG_ENV_VAR: &str = "ORRERY_CATALOG";

/// Main error type for the orrery library
#[derive(Debug, Error)]
pub enum OrreryError {
    #[error(transparent)]
    InvalidOrbitalElements(#[from] InvalidOrbitalElements),

    #[error("Time error: {0}")]
    TimeError(#[from] time::TimeError),

    #[error("Catalog error: {0}")]
    CatalogError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Object not found: {0}")]
    ObjectNotFound(String),
}

/// Result type for orrery operations
pub type Result<T> = std::result::Result<T, OrreryError>;

/// Entry point for loading a body catalog
///
/// An explicit path wins, then the `ORRERY_CATALOG` environment variable,
/// then the built-in seed catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogLoader {
    path: Option<PathBuf>,
    use_env: bool,
}

impl CatalogLoader {
    /// Create a loader that honours `ORRERY_CATALOG`
    pub fn new() -> Self {
        Self {
            path: None,
            use_env: true,
        }
    }

    /// Load from a specific JSON file
    pub fn with_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Ignore `ORRERY_CATALOG`
    pub fn without_env(mut self) -> Self {
        self.use_env = false;
        self
    }

    /// The file that [`load`](Self::load) will read, if any
    pub fn resolved_path(&self) -> Option<PathBuf> {
        self.path.clone().or_else(|| {
            if self.use_env {
                std::env::var_os(CATALOG_ENV_VAR)
                    .filter(|v| !v.is_empty())
                    .map(PathBuf::from)
            } else {
                None
            }
        })
    }

    /// Load and validate the catalog
    pub fn load(&self) -> Result<Catalog> {
        match self.resolved_path() {
            Some(path) => Catalog::from_file(path),
            None => {
                log::debug!("Using built-in catalog");
                Catalog::builtin()
            }
        }
    }
}
