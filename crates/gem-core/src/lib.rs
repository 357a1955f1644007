// crates/gem-core/src/lib.rs

//! # gem-core
//!
//! Resolves free-text place names, as typed into spreadsheet "location"
//! columns, to a canonical place record (name, state, country, latitude,
//! longitude) using a gazetteer built from GeoNames country dumps.
//!
//! - [`text::normalize`] cleans raw input into canonical form.
//! - [`Matcher`] runs the ordered strategy cascade against a [`PlaceStore`].
//! - [`Gazetteer`] is the in-memory store, persisted with bincode.
//! - [`loader`] imports GeoNames dumps; [`geocode`] batch-geocodes CSV.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod error;
pub mod geocode;
pub mod loader; // The public loader
pub mod model;
pub mod prelude;
pub mod search; // The matching cascade
pub mod states;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::DbStats;
pub use crate::error::{GemError, Result};
pub use crate::geocode::{geocode_csv, geocode_file, BatchSummary, DEFAULT_LOCATION_COLUMN};
pub use crate::loader::{import_partition, import_path, ImportSummary};
pub use crate::model::{Gazetteer, PlaceRecord};
pub use crate::search::{Matcher, Resolution, Strategy};
pub use crate::traits::{PlaceFilter, PlaceStore};

#[cfg(feature = "builder")]
pub use crate::loader::builder::{fetch_and_import, fetch_partition};
