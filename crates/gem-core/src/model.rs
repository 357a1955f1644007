// crates/gem-core/src/model.rs
use crate::common::DbStats;
use crate::error::{GemError, Result};
use crate::text::normalize;
use crate::traits::{PlaceFilter, PlaceStore};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// One gazetteer row: a single name variant of a single location.
///
/// Several records usually point at the same physical place (its official
/// name plus every alternate name), and several places share a name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaceRecord {
    pub name: String,
    /// Country as supplied by the dump (ISO2 code for GeoNames).
    pub country: String,
    /// Region/state code; empty for places without one.
    pub state: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Ranking signal only. Zero when unknown.
    pub population: i64,
    /// The dump partition this record was imported from.
    pub country_code: String,
}

impl PlaceRecord {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    /// `"{name}, {state}, {country}"`, as written by the batch geocoder.
    pub fn display_name(&self) -> String {
        format!("{}, {}, {}", self.name, self.state, self.country)
    }
}

/// In-memory gazetteer.
///
/// Records are kept in insertion order; `by_name` maps each normalized name to
/// the positions of the records carrying it. Only the records are persisted;
/// [`Gazetteer::from_places`] rebuilds the index on load.
#[derive(Clone, Debug, Default)]
pub struct Gazetteer {
    places: Vec<PlaceRecord>,
    by_name: HashMap<String, Vec<usize>>,
}

impl Gazetteer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a gazetteer from already validated records, indexing them.
    pub fn from_places(places: Vec<PlaceRecord>) -> Self {
        let mut db = Self {
            places: Vec::with_capacity(places.len()),
            by_name: HashMap::new(),
        };
        for place in places {
            db.push(place);
        }
        db
    }

    pub fn places(&self) -> &[PlaceRecord] {
        &self.places
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    fn push(&mut self, place: PlaceRecord) {
        let id = self.places.len();
        let key = normalize(&place.name);
        // Names made only of punctuation or unmappable script are kept but
        // can never be looked up.
        if !key.is_empty() {
            self.by_name.entry(key).or_default().push(id);
        }
        self.places.push(place);
    }
}

impl PlaceStore for Gazetteer {
    fn insert(&mut self, record: PlaceRecord) -> Result<()> {
        if record.name.is_empty() {
            return Err(GemError::InvalidData(
                "place records need a non-empty name".into(),
            ));
        }
        self.push(record);
        Ok(())
    }

    fn query(&self, filter: &PlaceFilter<'_>) -> Option<PlaceRecord> {
        let ids = self.by_name.get(&normalize(filter.name))?;

        // Ids are in insertion order; only a strictly larger population
        // replaces the current best.
        let mut best: Option<&PlaceRecord> = None;
        for &id in ids {
            let place = &self.places[id];
            if !filter.accepts_region(place) {
                continue;
            }
            match best {
                Some(b) if b.population >= place.population => {}
                _ => best = Some(place),
            }
        }
        best.cloned()
    }

    fn has_partition(&self, country_code: &str) -> bool {
        self.places.iter().any(|p| p.country_code == country_code)
    }

    fn stats(&self) -> DbStats {
        let partitions: BTreeSet<&str> = self
            .places
            .iter()
            .map(|p| p.country_code.as_str())
            .collect();
        DbStats {
            places: self.places.len(),
            names: self.by_name.len(),
            partitions: partitions.len(),
        }
    }
}
