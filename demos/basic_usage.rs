//! Basic usage example for gem-rs
//!
//! This example demonstrates how to:
//! - Build a small gazetteer in memory
//! - Resolve free-text locations with the matching cascade
//! - Persist the gazetteer and load it back

use gem_rs::prelude::*;

fn place(name: &str, state: &str, lat: f64, lon: f64, population: i64) -> PlaceRecord {
    PlaceRecord {
        name: name.into(),
        country: "US".into(),
        state: state.into(),
        latitude: lat,
        longitude: lon,
        population,
        country_code: "US".into(),
    }
}

fn main() -> Result<()> {
    println!("=== gem-rs Basic Usage Example ===\n");

    let mut db = Gazetteer::new();
    db.insert_batch(vec![
        place("Springfield", "IL", 39.80172, -89.64371, 116_250),
        place("Springfield", "MO", 37.21533, -93.29824, 167_882),
        place("Washington", "DC", 38.89511, -77.03637, 689_545),
        place("Portland", "OR", 45.52345, -122.67621, 652_503),
        place("Portland", "ME", 43.66147, -70.25533, 68_408),
    ])?;
    println!("✓ Gazetteer built with {} records\n", db.len());

    // Example 1: The cascade, one strategy per input
    println!("--- Example 1: Resolving locations ---");
    let matcher = Matcher::new(&db);
    for input in [
        "springfield",
        "Springfield, IL",
        "Portland, Maine",
        "washington d.c.",
        "Gotham",
    ] {
        match matcher.resolve(input) {
            Some(hit) => println!(
                "  {input:<18} -> {} ({}, {}) via {}",
                hit.place.display_name(),
                hit.place.latitude,
                hit.place.longitude,
                hit.strategy.label()
            ),
            None => println!("  {input:<18} -> no match"),
        }
    }
    println!();

    // Example 2: Persist and reload
    println!("--- Example 2: Save and reopen ---");
    let path = std::env::temp_dir().join("gem-demo.bin");
    db.save_as(&path)?;
    let reopened = Gazetteer::open(&path)?;
    println!("  Reloaded {} records from {}", reopened.len(), path.display());

    Ok(())
}
