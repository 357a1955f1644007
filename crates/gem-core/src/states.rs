// crates/gem-core/src/states.rs
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Full upper-case US state names and their two-letter postal codes.
pub const US_STATES: [(&str, &str); 50] = [
    ("ALABAMA", "AL"),
    ("ALASKA", "AK"),
    ("ARIZONA", "AZ"),
    ("ARKANSAS", "AR"),
    ("CALIFORNIA", "CA"),
    ("COLORADO", "CO"),
    ("CONNECTICUT", "CT"),
    ("DELAWARE", "DE"),
    ("FLORIDA", "FL"),
    ("GEORGIA", "GA"),
    ("HAWAII", "HI"),
    ("IDAHO", "ID"),
    ("ILLINOIS", "IL"),
    ("INDIANA", "IN"),
    ("IOWA", "IA"),
    ("KANSAS", "KS"),
    ("KENTUCKY", "KY"),
    ("LOUISIANA", "LA"),
    ("MAINE", "ME"),
    ("MARYLAND", "MD"),
    ("MASSACHUSETTS", "MA"),
    ("MICHIGAN", "MI"),
    ("MINNESOTA", "MN"),
    ("MISSISSIPPI", "MS"),
    ("MISSOURI", "MO"),
    ("MONTANA", "MT"),
    ("NEBRASKA", "NE"),
    ("NEVADA", "NV"),
    ("NEW HAMPSHIRE", "NH"),
    ("NEW JERSEY", "NJ"),
    ("NEW MEXICO", "NM"),
    ("NEW YORK", "NY"),
    ("NORTH CAROLINA", "NC"),
    ("NORTH DAKOTA", "ND"),
    ("OHIO", "OH"),
    ("OKLAHOMA", "OK"),
    ("OREGON", "OR"),
    ("PENNSYLVANIA", "PA"),
    ("RHODE ISLAND", "RI"),
    ("SOUTH CAROLINA", "SC"),
    ("SOUTH DAKOTA", "SD"),
    ("TENNESSEE", "TN"),
    ("TEXAS", "TX"),
    ("UTAH", "UT"),
    ("VERMONT", "VT"),
    ("VIRGINIA", "VA"),
    ("WASHINGTON", "WA"),
    ("WEST VIRGINIA", "WV"),
    ("WISCONSIN", "WI"),
    ("WYOMING", "WY"),
];

static STATE_FULL_TO_ABBR: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| US_STATES.iter().copied().collect());

/// Translate an upper-case full US state name into its two-letter code.
///
/// Returns `None` for anything that is not one of the 50 state names:
/// non-US regions, codes that are already abbreviated, misspellings, and
/// names in any other case (`"Oregon"` is not looked up, `"OREGON"` is).
///
/// ```rust
/// use gem_core::states::abbreviate;
///
/// assert_eq!(abbreviate("NEW YORK"), Some("NY"));
/// assert_eq!(abbreviate("NY"), None);
/// assert_eq!(abbreviate("ONTARIO"), None);
/// ```
pub fn abbreviate(full_name_upper: &str) -> Option<&'static str> {
    STATE_FULL_TO_ABBR.get(full_name_upper).copied()
}
