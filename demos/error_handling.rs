//! Error handling example for gem-rs
//!
//! This example demonstrates the difference between "no match" (a normal
//! outcome) and real errors.

use gem_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== gem-rs Error Handling Example ===\n");

    // Example 1: Handling a missing gazetteer file
    println!("--- Example 1: Opening a gazetteer that does not exist ---");
    match Gazetteer::open("/nonexistent/gazetteer.bin") {
        Ok(db) => println!("  Unexpectedly loaded {} records", db.len()),
        Err(e) => println!("  ✗ {e}"),
    }
    println!();

    let db = Gazetteer::from_places(vec![PlaceRecord {
        name: "Boise".into(),
        country: "US".into(),
        state: "ID".into(),
        latitude: 43.6135,
        longitude: -116.20345,
        population: 235_684,
        country_code: "US".into(),
    }]);

    // Example 2: Unresolvable input is not an error
    println!("--- Example 2: Locations that resolve to nothing ---");
    let matcher = Matcher::new(&db);
    for input in ["", "???", "Boise, Ontario", "Atlantis"] {
        match matcher.locate(input) {
            Some(place) => println!("  {input:?} -> {}", place.display_name()),
            None => println!("  {input:?} -> no match"),
        }
    }
    println!();

    // Example 3: A missing location column is a configuration error
    println!("--- Example 3: Batch geocoding with a wrong column ---");
    let csv = "id,city\n1,Boise\n";
    let mut out = Vec::new();
    match geocode_csv(&db, csv.as_bytes(), &mut out, DEFAULT_LOCATION_COLUMN) {
        Ok(summary) => println!("  Geocoded {} rows", summary.rows),
        Err(GemError::MissingColumn(column)) => println!("  ✗ no column named {column:?}"),
        Err(e) => return Err(e),
    }

    // Example 4: Rejected records
    println!("\n--- Example 4: Records need a name ---");
    let mut db = db;
    let nameless = PlaceRecord {
        name: String::new(),
        ..db.places()[0].clone()
    };
    if let Err(e) = db.insert(nameless) {
        println!("  ✗ {e}");
    }

    Ok(())
}
