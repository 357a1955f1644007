//! gem-core prelude: bring common types and traits into scope for demos.

pub use crate::error::{GemError, Result};
pub use crate::geocode::{geocode_csv, geocode_file, BatchSummary, DEFAULT_LOCATION_COLUMN};
pub use crate::model::{Gazetteer, PlaceRecord};
pub use crate::search::{Matcher, Resolution, Strategy};
pub use crate::traits::{PlaceFilter, PlaceStore};
