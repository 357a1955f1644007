//! gem-cli
//! =======
//!
//! Command-line interface for the `gem-core` geocoding engine.
//!
//! The binary (`gem`) is the primary deliverable. The library target exposes
//! the argument model and logging setup so they can be tested on their own.
//!
//! Basic usage:
//!
//! ```text
//! gem import --country US
//! gem geocode --in people.csv --out people_geocoded.csv --loc hometown
//! gem lookup "Portland, Oregon"
//! gem stats
//! ```
//!
//! For programmatic access use the [`gem-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod args;

use tracing::level_filters::LevelFilter;

/// Install a global `fmt` subscriber writing to stderr, so stdout only
/// carries command output. Call once, at startup.
pub fn init_logging(log_level: tracing::Level) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(LevelFilter::from_level(log_level))
        .init();
}
