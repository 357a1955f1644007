// crates/gem-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression) for the persisted
//! gazetteer and delegates dump parsing to [`geonames`].

use crate::error::{GemError, Result};
use crate::model::{Gazetteer, PlaceRecord};
use crate::traits::PlaceStore;
use std::path::{Path, PathBuf};
use tracing::info;

pub mod common_io;
pub mod geonames;

#[cfg(feature = "builder")]
pub mod builder;

pub use geonames::{import_partition, ImportSummary};

/// GeoNames per-country dump archive; `{}` is the upper-case ISO2 code.
pub const GEONAMES_DUMP_URL: &str = "http://download.geonames.org/export/dump/{}.zip";

#[cfg(not(feature = "compact"))]
pub const DATASET_FILENAME: &str = "gazetteer.bin";
#[cfg(feature = "compact")]
pub const DATASET_FILENAME: &str = "gazetteer.bin.gz";

/// The download URL of a country's dump archive.
pub fn dump_url(country_code: &str) -> String {
    GEONAMES_DUMP_URL.replace("{}", &country_code.trim().to_ascii_uppercase())
}

impl Gazetteer {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        DATASET_FILENAME
    }

    pub fn default_path() -> PathBuf {
        Self::default_data_dir().join(Self::default_dataset_filename())
    }

    /// Load a persisted gazetteer. Gzip is assumed for `*.gz` paths.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = common_io::open_stream(path)?;
        let places: Vec<PlaceRecord> = bincode::deserialize_from(reader)?;
        let db = Self::from_places(places);
        info!(path = %path.display(), places = db.len(), "gazetteer loaded");
        Ok(db)
    }

    /// Like [`Gazetteer::open`], but a missing file yields an empty gazetteer.
    pub fn open_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::open(path)
        } else {
            info!(path = %path.display(), "no gazetteer yet; starting empty");
            Ok(Self::new())
        }
    }

    /// Persist all records. The previous file is only replaced once the new
    /// one is completely written.
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        common_io::write_atomically(path, |w| {
            bincode::serialize_into(w, self.places()).map_err(GemError::Bincode)
        })?;
        info!(path = %path.display(), places = self.len(), "gazetteer saved");
        Ok(())
    }
}

/// Import a dump from disk: plain `<CC>.txt`, gzipped `*.gz`, or the
/// original `<CC>.zip` archive.
pub fn import_path<S: PlaceStore + ?Sized>(
    store: &mut S,
    path: impl AsRef<Path>,
    country_code: &str,
) -> Result<ImportSummary> {
    let path = path.as_ref();
    let is_zip = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"));

    if is_zip {
        #[cfg(feature = "builder")]
        {
            return builder::import_archive(store, path, country_code);
        }
        #[cfg(not(feature = "builder"))]
        {
            return Err(GemError::InvalidData(format!(
                "{} is a zip archive but 'builder' is disabled",
                path.display()
            )));
        }
    }

    let reader = common_io::open_stream(path)?;
    import_partition(store, reader, country_code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::PlaceFilter;

    fn sample() -> Gazetteer {
        Gazetteer::from_places(vec![
            PlaceRecord {
                name: "Boise".into(),
                country: "US".into(),
                state: "ID".into(),
                latitude: 43.6135,
                longitude: -116.20345,
                population: 235_684,
                country_code: "US".into(),
            },
            PlaceRecord {
                name: "Boise City".into(),
                country: "US".into(),
                state: "ID".into(),
                latitude: 43.6135,
                longitude: -116.20345,
                population: 235_684,
                country_code: "US".into(),
            },
        ])
    }

    #[test]
    fn dump_url_uses_upper_case_code() {
        assert_eq!(dump_url(" us"), "http://download.geonames.org/export/dump/US.zip");
    }

    #[test]
    fn save_then_open_rebuilds_index() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("g.bin");
        sample().save_as(&path).unwrap();

        let db = Gazetteer::open(&path).unwrap();
        assert_eq!(db.places(), sample().places());
        assert!(db.query(&PlaceFilter::named("boise city")).is_some());
    }

    #[cfg(feature = "compact")]
    #[test]
    fn gzipped_store_is_readable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("g.bin.gz");
        sample().save_as(&path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..2], &[0x1f, 0x8b]);
        assert_eq!(Gazetteer::open(&path).unwrap().len(), 2);
    }

    #[test]
    fn open_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = Gazetteer::open(dir.path().join("absent.bin")).unwrap_err();
        assert!(matches!(err, GemError::NotFound(_)));
    }

    #[test]
    fn open_or_default_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let db = Gazetteer::open_or_default(dir.path().join("absent.bin")).unwrap();
        assert!(db.is_empty());
    }

    #[test]
    fn save_leaves_no_temp_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("g.bin");
        sample().save_as(&path).unwrap();
        let entries: Vec<_> = std::fs::read_dir(path.parent().unwrap())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("g.bin")]);
    }

    const SAN_JOSE: &str = "5392171\tSan Jose\tSan Jose\tSan José\t37.33939\t-121.89496\tP\tPPLA2\tUS\t\tCA\t085\t\t\t1026908\t26\t25\tAmerica/Los_Angeles\t2019-09-05\n";

    #[test]
    fn imports_plain_dump() {
        let dir = tempfile::tempdir().unwrap();
        let txt = dir.path().join("US.txt");
        std::fs::write(&txt, SAN_JOSE).unwrap();
        let mut db = Gazetteer::new();
        assert_eq!(import_path(&mut db, &txt, "US").unwrap().records, 2);
    }

    #[cfg(feature = "compact")]
    #[test]
    fn imports_gzipped_dump() {
        use std::io::Write;

        let row = SAN_JOSE;
        let dir = tempfile::tempdir().unwrap();
        let gz = dir.path().join("US.txt.gz");
        common_io::write_atomically(&gz, |w| Ok(w.write_all(row.as_bytes())?)).unwrap();
        let mut db = Gazetteer::new();
        assert_eq!(import_path(&mut db, &gz, "US").unwrap().records, 2);
    }
}
