use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use hexworld_common::AxialCoord;

/// Noise values strictly below this are water.
pub const WATER_THRESHOLD: f64 = -0.3;
/// Noise values at or above this are desert.
pub const DESERT_THRESHOLD: f64 = 0.3;

const VARIANT_HASH_Q: i64 = 73_856_094;
const VARIANT_HASH_R: i64 = 19_349_663;
const VARIANT_HASH_MODULUS: i64 = 9_973;

/// Terrain category of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Biome {
    Grassland,
    Water,
    Desert,
}

impl Biome {
    pub const ALL: [Self; 3] = [Self::Grassland, Self::Water, Self::Desert];

    /// Whether an agent may stand on a tile of this biome.
    pub fn is_passable(self) -> bool {
        self != Self::Water
    }

    /// Number of visual variants; variants are numbered from 1.
    pub fn variant_count(self) -> u8 {
        3
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Grassland => "grassland",
            Self::Water => "water",
            Self::Desert => "desert",
        }
    }
}

impl fmt::Display for Biome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown biome {0:?}")]
pub struct BiomeParseError(pub String);

impl FromStr for Biome {
    type Err = BiomeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| BiomeParseError(s.to_owned()))
    }
}

/// Step function from a noise value to a biome. NaN classifies as desert.
pub fn classify(noise_value: f64) -> Biome {
    if noise_value < WATER_THRESHOLD {
        Biome::Water
    } else if noise_value < DESERT_THRESHOLD {
        Biome::Grassland
    } else {
        Biome::Desert
    }
}

/// Visual variant for a tile, in `1..=biome.variant_count()`.
///
/// Depends on the coordinate only, never on the world seed, so revisiting a
/// tile always reproduces the same variant.
pub fn variant_of(coord: AxialCoord, biome: Biome) -> u8 {
    let hash = (i64::from(coord.q) * VARIANT_HASH_Q + i64::from(coord.r) * VARIANT_HASH_R).abs()
        % VARIANT_HASH_MODULUS;
    // hash is in 0..9973 and the remainder fits a u8.
    (hash % i64::from(biome.variant_count())) as u8 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_water_boundary() {
        assert_eq!(classify(-1.0), Biome::Water);
        assert_eq!(classify(-0.300_001), Biome::Water);
        assert_eq!(classify(-0.3), Biome::Grassland);
        assert_eq!(classify(-0.299_999), Biome::Grassland);
    }

    #[test]
    fn classify_desert_boundary() {
        assert_eq!(classify(0.0), Biome::Grassland);
        assert_eq!(classify(0.299_999), Biome::Grassland);
        assert_eq!(classify(0.3), Biome::Desert);
        assert_eq!(classify(0.300_001), Biome::Desert);
        assert_eq!(classify(1.0), Biome::Desert);
    }

    #[test]
    fn classify_accepts_any_real() {
        assert_eq!(classify(f64::NEG_INFINITY), Biome::Water);
        assert_eq!(classify(f64::INFINITY), Biome::Desert);
        assert_eq!(classify(f64::NAN), Biome::Desert);
    }

    #[test]
    fn only_water_is_impassable() {
        assert!(Biome::Grassland.is_passable());
        assert!(Biome::Desert.is_passable());
        assert!(!Biome::Water.is_passable());
    }

    #[test]
    fn variant_known_values() {
        // |0| % 9973 = 0 -> variant 1
        assert_eq!(variant_of(AxialCoord::ORIGIN, Biome::Grassland), 1);
        // 73856094 % 9973 = 6029, 6029 % 3 = 2 -> variant 3
        assert_eq!(variant_of(AxialCoord::new(1, 0), Biome::Water), 3);
        // 19349663 % 9973 = 2043, 2043 % 3 = 0 -> variant 1
        assert_eq!(variant_of(AxialCoord::new(0, 1), Biome::Desert), 1);
    }

    #[test]
    fn variant_in_range_and_sign_symmetric() {
        for q in -50..50 {
            for r in -50..50 {
                let c = AxialCoord::new(q, r);
                let v = variant_of(c, Biome::Grassland);
                assert!((1..=3).contains(&v));
                assert_eq!(v, variant_of(AxialCoord::new(-q, -r), Biome::Grassland));
            }
        }
    }

    #[test]
    fn variant_ignores_biome_for_equal_counts() {
        let c = AxialCoord::new(12, -7);
        let v = variant_of(c, Biome::Water);
        assert_eq!(v, variant_of(c, Biome::Grassland));
        assert_eq!(v, variant_of(c, Biome::Desert));
    }

    #[test]
    fn parse_round_trips_names() {
        for b in Biome::ALL {
            assert_eq!(b.to_string().parse::<Biome>(), Ok(b));
        }
        assert_eq!("  WATER ".parse::<Biome>(), Ok(Biome::Water));
        assert!("lava".parse::<Biome>().is_err());
    }
}
