//! World Kernel: the authoritative procedural hex world.
//!
//! # Invariants
//! - A tile's biome and variant are pure functions of its coordinate and the
//!   world seed; they are never reassigned once stored.
//! - The tile store only grows, and only through `initialize` and `expand`.
//! - No global state: every world owns its seed and noise field.

pub mod biome;
pub mod config;
pub mod field;
pub mod world;

pub use biome::{Biome, BiomeParseError, DESERT_THRESHOLD, WATER_THRESHOLD, classify, variant_of};
pub use config::WorldConfig;
pub use field::{NOISE_FREQUENCY, SeededNoiseField};
pub use world::{Tile, WorldModel};

pub fn crate_info() -> &'static str {
    "hexworld-kernel v0.1.0"
}
