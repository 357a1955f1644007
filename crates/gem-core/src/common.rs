// crates/gem-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a gazetteer.
///
/// Returned by [`crate::traits::PlaceStore::stats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    /// Stored records (one per name variant and location).
    pub places: usize,
    /// Distinct normalized names.
    pub names: usize,
    /// Country-code partitions imported.
    pub partitions: usize,
}
