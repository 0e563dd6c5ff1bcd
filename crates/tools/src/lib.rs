//! Developer Tooling: read-only world inspection.
//!
//! # Invariants
//! - Tools never mutate the world.

mod inspector;

pub use inspector::{TileInfo, WorldInspector, WorldSummary};

pub fn crate_info() -> &'static str {
    "hexworld-tools v0.1.0"
}
