//! gem-rs: workspace umbrella crate.
//!
//! Re-exports [`gem_core`] so the demos under `demos/` can be run with
//! `cargo run --example <name>` from the workspace root.

pub use gem_core::*;
