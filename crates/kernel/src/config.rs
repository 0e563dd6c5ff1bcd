use serde::{Deserialize, Serialize};

/// World generation settings that may vary per session.
///
/// Biome thresholds and the noise frequency are fixed constants and are not
/// part of this configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Distance from a hex center to its corners, in world units.
    pub hex_radius: f64,
    /// Radius of the grid generated around the origin at session start.
    pub initial_radius: i32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            hex_radius: 1.0,
            initial_radius: 5,
        }
    }
}
