//! Shared hex-grid types and pure coordinate math.
//!
//! # Invariants
//! - Everything here is a pure function or a `Copy` value type.
//! - `AxialCoord` is the only key used to address tiles.

pub mod coords;
pub mod types;

pub use coords::{axial_to_cartesian, cartesian_to_axial, hex_distance};
pub use types::{AxialCoord, HexDirection};

pub fn crate_info() -> &'static str {
    "hexworld-common v0.1.0"
}
