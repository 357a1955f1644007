// crates/gem-core/src/loader/geonames.rs

//! GeoNames country dump (`<CC>.txt`) parsing.
//!
//! The dump is tab-separated, unquoted, one geographic feature per line.
//! Every feature fans out into one [`PlaceRecord`] per name it is known by.

use crate::error::{GemError, Result};
use crate::model::PlaceRecord;
use crate::traits::PlaceStore;
use std::io::Read;
use tracing::{info, warn};

// Column positions in the GeoNames "geoname" table.
const COL_NAME: usize = 1;
const COL_ALTERNATE_NAMES: usize = 3;
const COL_LATITUDE: usize = 4;
const COL_LONGITUDE: usize = 5;
const COL_COUNTRY: usize = 8;
const COL_ADMIN1: usize = 10;
const COL_POPULATION: usize = 14;

/// Outcome of importing one country partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub country_code: String,
    /// Dump rows read.
    pub rows: usize,
    /// Place records added to the store.
    pub records: usize,
}

/// Parse a whole dump into place records.
///
/// Fails on the first malformed row; nothing is returned in that case.
pub fn read_partition<R: Read>(reader: R, country_code: &str) -> Result<(usize, Vec<PlaceRecord>)> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    let mut rows = 0;
    for row in rdr.records() {
        let row = row?;
        rows += 1;
        // Blank lines are skipped by the reader, so count from the dump itself.
        let line = row.position().map_or(rows as u64, |p| p.line());
        push_row_records(&row, line, country_code, &mut records)?;
    }
    Ok((rows, records))
}

/// Parse a dump and append all of its records to `store` in one batch.
///
/// The partition is either imported completely or not at all.
pub fn import_partition<S, R>(store: &mut S, reader: R, country_code: &str) -> Result<ImportSummary>
where
    S: PlaceStore + ?Sized,
    R: Read,
{
    let country_code = country_code.trim().to_ascii_uppercase();
    if country_code.is_empty() {
        return Err(GemError::InvalidData("country code must not be empty".into()));
    }
    if store.has_partition(&country_code) {
        warn!(
            country_code = %country_code,
            "partition already present; records will be appended again"
        );
    }

    let (rows, records) = read_partition(reader, &country_code)?;
    let added = store.insert_batch(records)?;

    info!(country_code = %country_code, rows, records = added, "partition imported");
    Ok(ImportSummary {
        country_code,
        rows,
        records: added,
    })
}

fn push_row_records(
    row: &csv::StringRecord,
    line: u64,
    country_code: &str,
    out: &mut Vec<PlaceRecord>,
) -> Result<()> {
    if row.len() <= COL_POPULATION {
        return Err(GemError::MalformedRow {
            line,
            reason: format!("expected at least {} columns, found {}", COL_POPULATION + 1, row.len()),
        });
    }
    let field = |i: usize| row.get(i).unwrap_or("").trim();

    let latitude = parse_coordinate(field(COL_LATITUDE), "latitude", line)?;
    let longitude = parse_coordinate(field(COL_LONGITUDE), "longitude", line)?;
    let population = match field(COL_POPULATION) {
        "" => 0,
        p => p.parse::<i64>().map_err(|e| GemError::MalformedRow {
            line,
            reason: format!("population {p:?}: {e}"),
        })?,
    };
    if population < 0 {
        return Err(GemError::MalformedRow {
            line,
            reason: format!("negative population {population}"),
        });
    }
    let country = field(COL_COUNTRY);
    let state = field(COL_ADMIN1);

    let mut names: Vec<&str> = Vec::new();
    let primary = field(COL_NAME);
    let alternates = field(COL_ALTERNATE_NAMES).split(',').map(str::trim);
    for name in std::iter::once(primary).chain(alternates) {
        if !name.is_empty() && !names.contains(&name) {
            names.push(name);
        }
    }

    out.extend(names.into_iter().map(|name| PlaceRecord {
        name: name.to_string(),
        country: country.to_string(),
        state: state.to_string(),
        latitude,
        longitude,
        population,
        country_code: country_code.to_string(),
    }));
    Ok(())
}

fn parse_coordinate(raw: &str, what: &str, line: u64) -> Result<f64> {
    raw.parse::<f64>().map_err(|e| GemError::MalformedRow {
        line,
        reason: format!("{what} {raw:?}: {e}"),
    })
}
