// crates/gem-core/src/loader/builder.rs
#![cfg(feature = "builder")]

use super::geonames::{import_partition, ImportSummary};
use super::dump_url;
use crate::error::{GemError, Result};
use crate::traits::PlaceStore;
use std::io::{Cursor, Read};
use std::path::Path;
use tracing::info;

/// Download `<CC>.zip` from GeoNames and return the bytes of `<CC>.txt`.
pub fn fetch_partition(country_code: &str) -> Result<Vec<u8>> {
    let url = dump_url(country_code);
    info!(%url, "downloading dump archive");

    let response = reqwest::blocking::get(&url)?.error_for_status()?;
    let archive = response.bytes()?;
    info!(bytes = archive.len(), "archive downloaded");

    extract_partition(Cursor::new(archive), country_code)
}

/// Download and import a partition in one go.
pub fn fetch_and_import<S: PlaceStore + ?Sized>(
    store: &mut S,
    country_code: &str,
) -> Result<ImportSummary> {
    let dump = fetch_partition(country_code)?;
    import_partition(store, dump.as_slice(), country_code)
}

/// Import a dump archive that is already on disk.
pub fn import_archive<S: PlaceStore + ?Sized>(
    store: &mut S,
    path: &Path,
    country_code: &str,
) -> Result<ImportSummary> {
    let file = std::fs::File::open(path).map_err(|e| {
        GemError::NotFound(format!("Archive not found at {}: {}", path.display(), e))
    })?;
    let dump = extract_partition(std::io::BufReader::new(file), country_code)?;
    import_partition(store, dump.as_slice(), country_code)
}

/// Pull the `<CC>.txt` member out of a GeoNames zip archive.
pub fn extract_partition<R>(archive: R, country_code: &str) -> Result<Vec<u8>>
where
    R: Read + std::io::Seek,
{
    let member = format!("{}.txt", country_code.trim().to_ascii_uppercase());
    let mut zip = zip::ZipArchive::new(archive)?;
    let mut file = zip.by_name(&member).map_err(|e| match e {
        zip::result::ZipError::FileNotFound => {
            GemError::NotFound(format!("archive has no member {member}"))
        }
        other => GemError::Archive(other),
    })?;

    let mut dump = Vec::with_capacity(file.size() as usize);
    file.read_to_end(&mut dump)?;
    Ok(dump)
}
