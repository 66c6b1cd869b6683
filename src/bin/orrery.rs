//! Orrery command line tool
//!
//! Prints the estimated heliocentric state of every catalog body at one
//! instant, looks up a single body, and manages catalog files.
//!
//! Usage:
//!   cargo run --bin orrery -- snapshot --at 2024-03-15T06:30:00Z
//!   cargo run --bin orrery -- body Juno
//!   cargo run --bin orrery -- catalog export catalog.json

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{ArgAction, Parser, Subcommand};
use orrery::catalogs::records::PhysicalProperties;
use orrery::format::{format_distance, format_pressure, format_speed, MissionElapsed};
use orrery::snapshot::{PlanetSnapshot, SpacecraftSnapshot};
use orrery::{time, Catalog, CatalogLoader, Ephemeris, KeplerSolver, RelativeMotion, Snapshot};

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Solar system position estimator
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Estimates heliocentric positions of planets, moons and spacecraft",
    long_about = None
)]
struct Args {
    /// Catalog JSON file (defaults to $ORRERY_CATALOG, then the built-in catalog)
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    /// Iterate Kepler's equation to convergence instead of a fixed 10 steps
    #[arg(long, action = ArgAction::SetTrue, global = true)]
    converge: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate every catalog body at one instant
    Snapshot {
        /// Evaluation time (YYYY-MM-DD or RFC 3339), defaults to now
        #[arg(long)]
        at: Option<String>,

        /// Print the snapshot as JSON
        #[arg(long, action = ArgAction::SetTrue)]
        json: bool,
    },
    /// Show one planet, moon or spacecraft
    Body {
        name: String,

        /// Evaluation time (YYYY-MM-DD or RFC 3339), defaults to now
        #[arg(long)]
        at: Option<String>,
    },
    /// Catalog file maintenance
    #[command(subcommand)]
    Catalog(CatalogCommand),
}

#[derive(Subcommand, Debug)]
enum CatalogCommand {
    /// Write the current catalog to a JSON file
    Export { path: PathBuf },
    /// Validate a catalog JSON file
    Check { path: PathBuf },
    /// Mark en-route spacecraft whose arrival date has passed as arrived
    Refresh {
        path: PathBuf,

        /// Reference time, defaults to now
        #[arg(long)]
        at: Option<String>,
    },
}

fn evaluation_time(at: Option<&str>) -> Result<DateTime<Utc>> {
    Ok(match at {
        Some(text) => time::parse_date(text)?,
        None => Utc::now(),
    })
}

fn load_catalog(path: Option<&PathBuf>) -> Result<Catalog> {
    let mut loader = CatalogLoader::new();
    if let Some(path) = path {
        loader = loader.with_path(path);
    }
    Ok(loader.load()?)
}

/// Prints a section header with a title and separator line
fn print_section_header(title: &str) {
    println!("\n{}:", title);
    println!("-------------------------------------------------------");
}

fn print_class(props: &PhysicalProperties) {
    if let Some(class) = props.class {
        println!("Class: {}", class.label());
    }
}

fn relative_columns(relative: Option<&RelativeMotion>) -> (String, String) {
    match relative {
        Some(r) => (format_distance(r.distance_au), format_speed(r.speed_km_s)),
        None => ("N/A".to_string(), "N/A".to_string()),
    }
}

fn print_planet(planet: &PlanetSnapshot) {
    let (d_earth, v_earth) = relative_columns(planet.relative_to_earth.as_ref());
    println!(
        "{:<10} {:>8.4} AU  {:>11}  | Earth: {:>22} {:>12}",
        planet.name,
        planet.state.distance_from_sun,
        format_speed(planet.state.speed_rel_sun),
        d_earth,
        v_earth
    );
    for moon in &planet.moons {
        let (d_earth, v_earth) = relative_columns(moon.relative_to_earth.as_ref());
        println!(
            "  {:<8} {:>8.4} AU  {:>11}  | Earth: {:>22} {:>12}",
            moon.name,
            moon.state.distance_from_sun,
            format_speed(moon.state.speed_rel_sun),
            d_earth,
            v_earth
        );
    }
}

fn print_spacecraft(sc: &SpacecraftSnapshot, when: &DateTime<Utc>) {
    let elapsed = MissionElapsed::between(&time::start_of_day(sc.launch_date), when);
    let target = match sc.target_distance_au {
        Some(d) => format!("{:.3} AU to target", d),
        None => String::new(),
    };
    println!(
        "{:<20} {:<9} {:>8.3} AU  {:>11}  {:<14} {:<30} {}",
        sc.name,
        sc.status.to_string(),
        sc.state.distance_from_sun,
        format_speed(sc.state.speed_rel_sun),
        elapsed.to_string(),
        sc.current_phase.as_deref().unwrap_or("-"),
        target
    );
}

fn run_snapshot(
    catalog: &Catalog,
    ephemeris: &Ephemeris,
    when: DateTime<Utc>,
    json: bool,
) -> Result<()> {
    let snapshot = Snapshot::evaluate(catalog, ephemeris, &when);

    if json {
        println!("{}", snapshot.to_json_string()?);
        return Ok(());
    }

    println!(
        "Evaluation time: {} (JD {:.5}, civil date {})",
        when.to_rfc3339(),
        snapshot.julian_date,
        time::calendar::format_date(snapshot.julian_date)
    );

    print_section_header("Planets and moons");
    for planet in &snapshot.planets {
        print_planet(planet);
    }

    print_section_header(&format!(
        "Spacecraft ({} active, {} inactive)",
        snapshot.spacecraft.len() - snapshot.inactive_count,
        snapshot.inactive_count
    ));
    for sc in &snapshot.spacecraft {
        print_spacecraft(sc, &when);
    }

    Ok(())
}

fn run_body(
    catalog: &Catalog,
    ephemeris: &Ephemeris,
    name: &str,
    when: DateTime<Utc>,
) -> Result<()> {
    let snapshot = Snapshot::evaluate(catalog, ephemeris, &when);
    let state = snapshot
        .find(name)
        .ok_or_else(|| orrery::OrreryError::ObjectNotFound(name.to_string()))?;

    print_section_header(name);
    println!(
        "Position (AU): [{:.6}, {:.6}, {:.6}]",
        state.position.x, state.position.y, state.position.z
    );
    println!(
        "Velocity (km/s): [{:.4}, {:.4}, {:.4}]",
        state.velocity.x, state.velocity.y, state.velocity.z
    );
    println!(
        "Distance from Sun: {} ({:.4} AU)",
        format_distance(state.distance_from_sun),
        state.distance_from_sun
    );
    println!("Speed relative to Sun: {}", format_speed(state.speed_rel_sun));

    if let Ok(planet) = catalog.planet(name) {
        let props = &planet.properties;
        print_class(props);
        println!("Orbital period: {:.4} Earth years", planet.elements.orbital_period_years);
        println!("Radius: {} km, mass: {:e} kg", props.radius_km, props.mass_kg);
        println!("Atmosphere: {}", format_pressure(props.atmospheric_pressure_pa));
    } else if let Ok(moon) = catalog.moon(name) {
        let props = &moon.properties;
        print_class(props);
        println!("Parent: {}", moon.parent);
        println!("Orbital period: {:.4} Earth days", moon.elements.orbital_period_days);
        println!("Radius: {} km, mass: {:e} kg", props.radius_km, props.mass_kg);
        println!("Atmosphere: {}", format_pressure(props.atmospheric_pressure_pa));
    } else if let Ok(sc) = catalog.spacecraft_named(name) {
        println!("Target: {} ({}, {})", sc.target_body, sc.trajectory_type, sc.status);
        println!(
            "Launched: {} ({} ago)",
            sc.launch_date,
            MissionElapsed::between(&sc.launched_at(), &when)
        );
        if let Some(phase) = sc.current_phase(&when) {
            println!("Phase: {}", phase);
        }
    }

    Ok(())
}

fn run_catalog(catalog_path: Option<&PathBuf>, command: CatalogCommand) -> Result<()> {
    match command {
        CatalogCommand::Export { path } => {
            let catalog = load_catalog(catalog_path)?;
            catalog.save(&path)?;
            println!(
                "Wrote {} planets, {} moons, {} spacecraft to {}",
                catalog.planets().len(),
                catalog.moons().len(),
                catalog.spacecraft().len(),
                path.display()
            );
        }
        CatalogCommand::Check { path } => {
            let catalog = Catalog::from_file(&path)?;
            println!(
                "{} is valid: {} planets, {} moons, {} spacecraft",
                path.display(),
                catalog.planets().len(),
                catalog.moons().len(),
                catalog.spacecraft().len()
            );
        }
        CatalogCommand::Refresh { path, at } => {
            let when = evaluation_time(at.as_deref())?;
            let mut catalog = Catalog::from_file(&path)?;
            let updated = catalog.refresh_mission_phases(&when);
            if updated.is_empty() {
                println!("No mission phases changed");
            } else {
                catalog.save(&path)?;
                for name in updated {
                    println!("Updated {}: Arrived", name);
                }
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let ephemeris = if args.converge {
        Ephemeris::with_solver(KeplerSolver::converging(1e-15, 200))
    } else {
        Ephemeris::new()
    };

    match args.command {
        Command::Snapshot { at, json } => {
            let catalog = load_catalog(args.catalog.as_ref())?;
            run_snapshot(&catalog, &ephemeris, evaluation_time(at.as_deref())?, json)
        }
        Command::Body { name, at } => {
            let catalog = load_catalog(args.catalog.as_ref())?;
            run_body(&catalog, &ephemeris, &name, evaluation_time(at.as_deref())?)
        }
        Command::Catalog(command) => run_catalog(args.catalog.as_ref(), command),
    }
}
