// crates/gem-core/src/search.rs

//! # Location Matcher
//!
//! Resolves a free-text location against a [`PlaceStore`] by running a fixed
//! cascade of strategies over the normalized string. The first strategy that
//! finds a record wins; later ones never run.

use crate::model::PlaceRecord;
use crate::states::abbreviate;
use crate::text::{contains_ignore_case, has_token, normalize};
use crate::traits::{PlaceFilter, PlaceStore};
use tracing::debug;

/// One matching heuristic. Each is total: it either finds a record or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// "washington" together with a standalone "dc" token resolves to the
    /// most populous place named exactly "Washington".
    WashingtonDc,
    /// "Name, Region" split on the last comma; region is a two-letter code
    /// or a full US state name, matched against state or country.
    NameRegion,
    /// The whole normalized string as a place name.
    WholeName,
}

impl Strategy {
    /// The order strategies are tried in.
    pub const CASCADE: [Strategy; 3] = [
        Strategy::WashingtonDc,
        Strategy::NameRegion,
        Strategy::WholeName,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Strategy::WashingtonDc => "washington-dc",
            Strategy::NameRegion => "name-region",
            Strategy::WholeName => "whole-name",
        }
    }

    /// Run this strategy over an already normalized location.
    pub fn resolve<S>(&self, store: &S, normalized: &str) -> Option<PlaceRecord>
    where
        S: PlaceStore + ?Sized,
    {
        match self {
            Strategy::WashingtonDc => {
                if contains_ignore_case(normalized, "washington") && has_token(normalized, "dc") {
                    store.query(&PlaceFilter::named("Washington"))
                } else {
                    None
                }
            }
            Strategy::NameRegion => {
                let (name, region) = split_name_region(normalized)?;
                store.query(&PlaceFilter::named(name).in_region(&region))
            }
            Strategy::WholeName => store.query(&PlaceFilter::named(normalized)),
        }
    }
}

/// Split `"Name, Region"` on the last comma into a name and a region code.
///
/// The region is trimmed and upper-cased. Anything longer than two characters
/// is taken as a full US state name and abbreviated; when that fails, or the
/// region is empty, there is no usable filter and `None` is returned.
///
/// ```rust
/// use gem_core::search::split_name_region;
///
/// assert_eq!(
///     split_name_region("Springfield, Greene, Mo"),
///     Some(("Springfield, Greene", "MO".to_string()))
/// );
/// assert_eq!(
///     split_name_region("Portland, Oregon"),
///     Some(("Portland", "OR".to_string()))
/// );
/// assert_eq!(split_name_region("Toronto, Ontario"), None);
/// ```
pub fn split_name_region(normalized: &str) -> Option<(&str, String)> {
    let (name, region) = normalized.rsplit_once(',')?;
    let region = region.trim().to_uppercase();
    let code = if region.len() > 2 {
        abbreviate(&region)?.to_string()
    } else {
        region
    };
    if code.is_empty() {
        return None;
    }
    Some((name.trim(), code))
}

/// A successful lookup and the strategy that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub strategy: Strategy,
    pub place: PlaceRecord,
}

/// Resolves raw location strings against a borrowed store.
///
/// ```rust
/// use gem_core::{Gazetteer, Matcher, PlaceRecord};
///
/// let db = Gazetteer::from_places(vec![PlaceRecord {
///     name: "Springfield".into(),
///     country: "US".into(),
///     state: "IL".into(),
///     latitude: 39.8,
///     longitude: -89.6,
///     population: 116_250,
///     country_code: "US".into(),
/// }]);
///
/// let matcher = Matcher::new(&db);
/// assert_eq!(matcher.locate("springfield, il").unwrap().state, "IL");
/// assert!(matcher.locate("Shelbyville").is_none());
/// ```
pub struct Matcher<'a, S: PlaceStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: PlaceStore + ?Sized> Matcher<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Resolve `raw` to a single place, or `None` when nothing matches.
    pub fn locate(&self, raw: &str) -> Option<PlaceRecord> {
        self.resolve(raw).map(|r| r.place)
    }

    /// Like [`Matcher::locate`], also reporting which strategy matched.
    pub fn resolve(&self, raw: &str) -> Option<Resolution> {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            return None;
        }
        Strategy::CASCADE.iter().find_map(|strategy| {
            let place = strategy.resolve(self.store, &normalized)?;
            debug!(
                input = raw,
                strategy = strategy.label(),
                name = %place.name,
                state = %place.state,
                "location resolved"
            );
            Some(Resolution {
                strategy: *strategy,
                place,
            })
        })
    }
}
