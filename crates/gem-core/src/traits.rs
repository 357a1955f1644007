// crates/gem-core/src/traits.rs
use crate::common::DbStats;
use crate::error::{GemError, Result};
use crate::model::PlaceRecord;

/// Exact-match lookup criteria for a single place.
///
/// `name` is compared against the normalized record name. When `region` is
/// set, a record qualifies if its `state` OR its `country` equals it.
///
/// ```rust
/// use gem_core::traits::PlaceFilter;
///
/// let f = PlaceFilter::named("Springfield").in_region("IL");
/// assert_eq!(f.region, Some("IL"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceFilter<'a> {
    pub name: &'a str,
    pub region: Option<&'a str>,
}

impl<'a> PlaceFilter<'a> {
    pub fn named(name: &'a str) -> Self {
        Self { name, region: None }
    }

    pub fn in_region(self, region: &'a str) -> Self {
        Self {
            region: Some(region),
            ..self
        }
    }

    /// Region check only; name equality is resolved by the store's index.
    #[inline]
    pub fn accepts_region(&self, place: &PlaceRecord) -> bool {
        self.region
            .map_or(true, |r| place.state == r || place.country == r)
    }
}

/// The gazetteer seen by the matcher and the batch geocoder.
///
/// Lookups are single-result: the highest-population record passing the
/// filter, ties going to the record inserted first. Stores never do fuzzy or
/// partial matching.
pub trait PlaceStore {
    /// Append one record. Records with an empty `name` are rejected.
    fn insert(&mut self, record: PlaceRecord) -> Result<()>;

    /// Append a whole batch, or nothing at all.
    ///
    /// Every record is validated before the first one is stored, so a bad
    /// record leaves the store untouched. Returns the number of records added.
    fn insert_batch(&mut self, records: Vec<PlaceRecord>) -> Result<usize> {
        if let Some(bad) = records.iter().position(|r| r.name.is_empty()) {
            return Err(GemError::InvalidData(format!(
                "record {bad} of batch has an empty name"
            )));
        }
        let added = records.len();
        for record in records {
            self.insert(record)?;
        }
        Ok(added)
    }

    fn query(&self, filter: &PlaceFilter<'_>) -> Option<PlaceRecord>;

    /// Returns `true` if any record came from the given dump partition.
    fn has_partition(&self, country_code: &str) -> bool;

    fn stats(&self) -> DbStats;
}
