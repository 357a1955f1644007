// crates/gem-core/src/geocode.rs

//! # Batch Geocoder
//!
//! Copies a CSV file row by row, appending the resolved place name and
//! coordinates for each row's location cell.

use crate::error::{GemError, Result};
use crate::loader::common_io::write_atomically;
use crate::search::Matcher;
use crate::traits::PlaceStore;
use std::io::{Read, Write};
use std::path::Path;
use tracing::info;

/// Column read when the caller does not name one.
pub const DEFAULT_LOCATION_COLUMN: &str = "location";

/// Headers appended to the input header row.
pub const OUTPUT_HEADERS: [&str; 3] = ["code_placename", "code_longitude", "code_latitude"];

/// Counts from one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Data rows read and written.
    pub rows: usize,
    /// Rows whose location resolved to a place.
    pub matched: usize,
}

/// Geocode CSV from `input` into `output`.
///
/// The location column is looked up by exact header text before any row is
/// read; a missing column is [`GemError::MissingColumn`]. Every input row
/// produces exactly one output row with three extra fields, which are empty
/// when the location does not resolve.
pub fn geocode_csv<S, R, W>(
    store: &S,
    input: R,
    output: W,
    location_column: &str,
) -> Result<BatchSummary>
where
    S: PlaceStore + ?Sized,
    R: Read,
    W: Write,
{
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(input);
    let mut writer = csv::WriterBuilder::new().flexible(true).from_writer(output);

    let headers = reader.byte_headers()?.clone();
    let location_idx = headers
        .iter()
        .position(|h| h == location_column.as_bytes())
        .ok_or_else(|| GemError::MissingColumn(location_column.to_string()))?;

    writer.write_record(headers.iter().chain(OUTPUT_HEADERS.map(str::as_bytes)))?;

    let matcher = Matcher::new(store);
    let mut summary = BatchSummary::default();
    // Cells are copied through as raw bytes; only the location is decoded.
    for row in reader.byte_records() {
        let row = row?;
        let place = row
            .get(location_idx)
            .and_then(|loc| matcher.locate(&String::from_utf8_lossy(loc)));

        let appended = match &place {
            Some(p) => [
                p.display_name(),
                p.longitude.to_string(),
                p.latitude.to_string(),
            ],
            None => Default::default(),
        };
        writer.write_record(row.iter().chain(appended.iter().map(String::as_bytes)))?;

        summary.rows += 1;
        if place.is_some() {
            summary.matched += 1;
        }
    }
    writer.flush()?;

    info!(
        rows = summary.rows,
        matched = summary.matched,
        column = location_column,
        "batch geocoded"
    );
    Ok(summary)
}

/// File-to-file wrapper around [`geocode_csv`].
///
/// The output is written to a temp file next to `output_path` and renamed
/// into place on success, so a failed run leaves no output behind.
pub fn geocode_file<S: PlaceStore + ?Sized>(
    store: &S,
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    location_column: &str,
) -> Result<BatchSummary> {
    let input_path = input_path.as_ref();
    let input = std::fs::read(input_path).map_err(|e| {
        GemError::NotFound(format!("Input not found at {}: {}", input_path.display(), e))
    })?;

    // Fail on configuration before touching the output path.
    let headers = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(input.as_slice())
        .byte_headers()?
        .clone();
    if !headers.iter().any(|h| h == location_column.as_bytes()) {
        return Err(GemError::MissingColumn(location_column.to_string()));
    }

    let mut summary = BatchSummary::default();
    write_atomically(output_path.as_ref(), |out| {
        summary = geocode_csv(store, input.as_slice(), out, location_column)?;
        Ok(())
    })?;
    Ok(summary)
}
