//! gem: command-line interface for gem-core
//!
//! This binary builds a gazetteer from GeoNames country dumps and uses it to
//! geocode the location column of CSV files.
//!
//! Usage examples
//! --------------
//!
//! - Import the United States partition (downloads US.zip from GeoNames)
//!   $ gem import --country US
//!
//! - Import from a dump that is already on disk, replacing the store
//!   $ gem import --country CA --source ./CA.zip --reset
//!
//! - Geocode a spreadsheet (column defaults to `location`)
//!   $ gem geocode --in people.csv --out people_geocoded.csv --loc hometown
//!
//! - Resolve a single string
//!   $ gem lookup "Portland, Oregon"
//!
//! - Show overall stats
//!   $ gem stats
//!
//! Data source
//! -----------
//!
//! The gazetteer lives at `gem-core/data/gazetteer.bin.gz` unless `--db` (or
//! `GEM_GAZETTEER`) points elsewhere. Every import rewrites the whole file.
use anyhow::Context;
use clap::Parser;
use gem_cli::args::{CliArgs, Commands};
use gem_cli::init_logging;
use gem_core::{Gazetteer, Matcher, PlaceStore};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.log_level);

    let db_path = args.db.unwrap_or_else(Gazetteer::default_path);

    match args.command {
        Commands::Import {
            country,
            source,
            reset,
        } => {
            let mut db = if reset {
                info!("reset requested; starting from an empty gazetteer");
                Gazetteer::new()
            } else {
                Gazetteer::open_or_default(&db_path)?
            };

            let summary = match source {
                Some(path) => gem_core::import_path(&mut db, &path, &country)
                    .with_context(|| format!("importing {}", path.display()))?,
                None => fetch(&mut db, &country)?,
            };
            db.save_as(&db_path)?;

            println!(
                "Imported {} rows ({} names) for {} into {}",
                summary.rows,
                summary.records,
                summary.country_code,
                db_path.display()
            );
        }

        Commands::Geocode {
            input,
            output,
            location,
        } => {
            let db = Gazetteer::open(&db_path)?;
            let summary = gem_core::geocode_file(&db, &input, &output, &location)?;
            println!(
                "Geocoding complete! {} of {} rows matched. Output file stored at {}",
                summary.matched,
                summary.rows,
                output.display()
            );
        }

        Commands::Lookup { location, json } => {
            let db = Gazetteer::open(&db_path)?;
            match Matcher::new(&db).resolve(&location) {
                Some(hit) if json => {
                    let value = serde_json::json!({
                        "strategy": hit.strategy.label(),
                        "name": hit.place.name,
                        "state": hit.place.state,
                        "country": hit.place.country,
                        "latitude": hit.place.latitude,
                        "longitude": hit.place.longitude,
                        "population": hit.place.population,
                    });
                    println!("{}", serde_json::to_string_pretty(&value)?);
                }
                Some(hit) => {
                    println!("Place: {}", hit.place.display_name());
                    println!("Latitude: {}", hit.place.latitude);
                    println!("Longitude: {}", hit.place.longitude);
                    println!("Population: {}", hit.place.population);
                    println!("Matched by: {}", hit.strategy.label());
                }
                None => {
                    eprintln!("No match for: {location}");
                }
            }
        }

        Commands::Stats => {
            let db = Gazetteer::open(&db_path)?;
            let stats = db.stats();
            println!("Gazetteer statistics ({}):", db_path.display());
            println!("  Records: {}", stats.places);
            println!("  Distinct names: {}", stats.names);
            println!("  Partitions: {}", stats.partitions);
        }
    }

    Ok(())
}

#[cfg(feature = "builder")]
fn fetch(db: &mut Gazetteer, country: &str) -> anyhow::Result<gem_core::ImportSummary> {
    gem_core::fetch_and_import(db, country)
        .with_context(|| format!("downloading partition {country}"))
}

#[cfg(not(feature = "builder"))]
fn fetch(_db: &mut Gazetteer, country: &str) -> anyhow::Result<gem_core::ImportSummary> {
    anyhow::bail!("no --source given for {country} and downloads need the 'builder' feature")
}
