use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use hexworld_common::{AxialCoord, cartesian_to_axial};

use crate::biome::{Biome, classify, variant_of};
use crate::config::WorldConfig;
use crate::field::SeededNoiseField;

/// A generated hex tile.
///
/// Biome and variant are derived from the coordinate (and, for the biome,
/// the world seed) at creation and never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub coord: AxialCoord,
    pub biome: Biome,
    pub variant: u8,
}

impl Tile {
    pub fn is_passable(&self) -> bool {
        self.biome.is_passable()
    }
}

/// The authoritative hex world.
///
/// Owns every generated tile, keyed by coordinate. Tiles are only ever added,
/// by [`initialize`](Self::initialize) and [`expand`](Self::expand), and both
/// return the tiles they created so a view layer can mirror them.
///
/// Uses BTreeMap for deterministic iteration order: two worlds built from the
/// same seed and the same sequence of calls hash identically.
#[derive(Debug, Clone)]
pub struct WorldModel {
    field: SeededNoiseField,
    hex_radius: f64,
    tiles: BTreeMap<AxialCoord, Tile>,
}

impl WorldModel {
    /// Create an empty world with the default configuration.
    pub fn new(seed: &str) -> Self {
        Self::with_config(seed, &WorldConfig::default())
    }

    pub fn with_config(seed: &str, config: &WorldConfig) -> Self {
        tracing::debug!(seed, hex_radius = config.hex_radius, "creating world");
        Self {
            field: SeededNoiseField::new(seed),
            hex_radius: config.hex_radius,
            tiles: BTreeMap::new(),
        }
    }

    pub fn seed(&self) -> &str {
        self.field.seed()
    }

    pub fn hex_radius(&self) -> f64 {
        self.hex_radius
    }

    pub fn field(&self) -> &SeededNoiseField {
        &self.field
    }

    /// Number of generated tiles.
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Read-only access to all tiles in canonical coordinate order.
    pub fn tiles(&self) -> &BTreeMap<AxialCoord, Tile> {
        &self.tiles
    }

    pub fn get(&self, coord: AxialCoord) -> Option<&Tile> {
        self.tiles.get(&coord)
    }

    pub fn exists(&self, coord: AxialCoord) -> bool {
        self.tiles.contains_key(&coord)
    }

    /// False for missing tiles and for water.
    pub fn is_passable(&self, coord: AxialCoord) -> bool {
        self.tiles.get(&coord).is_some_and(Tile::is_passable)
    }

    /// The tile whose hex contains the world position `(x, z)`, if generated.
    pub fn tile_at_position(&self, x: f64, z: f64) -> Option<&Tile> {
        self.get(cartesian_to_axial(x, z, self.hex_radius))
    }

    /// Compute the tile for `coord` without storing it.
    pub fn generate_tile(&self, coord: AxialCoord) -> Tile {
        let biome = classify(self.field.sample(coord));
        Tile {
            coord,
            biome,
            variant: variant_of(coord, biome),
        }
    }

    /// Generate every tile within `grid_radius` of the origin.
    ///
    /// Returns the tiles created by this call; on a fresh world that is the
    /// whole grid. A negative radius generates nothing.
    pub fn initialize(&mut self, grid_radius: i32) -> Vec<Tile> {
        if grid_radius < 0 {
            return Vec::new();
        }
        let _span = tracing::info_span!("world_initialize", grid_radius).entered();
        let mut created = Vec::new();
        for q in -grid_radius..=grid_radius {
            for r in -grid_radius..=grid_radius {
                let s = -i64::from(q) - i64::from(r);
                if s.abs() <= i64::from(grid_radius) {
                    created.extend(self.insert_if_absent(AxialCoord::new(q, r)));
                }
            }
        }
        tracing::debug!(
            created = created.len(),
            total = self.tiles.len(),
            "grid initialized"
        );
        created
    }

    /// Generate any missing tiles within `range` of `center`.
    ///
    /// Returns only the tiles inserted by this call; existing tiles are left
    /// untouched and not re-emitted. A negative range generates nothing.
    ///
    /// Coordinates past the `i32` limits are skipped.
    pub fn expand(&mut self, center: AxialCoord, range: i32) -> Vec<Tile> {
        if range < 0 {
            return Vec::new();
        }
        let _span = tracing::info_span!("world_expand", q = center.q, r = center.r, range).entered();
        let mut created = Vec::new();
        let wide = i64::from(range);
        for dq in -range..=range {
            let Some(q) = center.q.checked_add(dq) else {
                continue;
            };
            // Both bounds stay within [-range, range].
            let lo = (-wide).max(-i64::from(dq) - wide) as i32;
            let hi = wide.min(-i64::from(dq) + wide) as i32;
            for dr in lo..=hi {
                let Some(r) = center.r.checked_add(dr) else {
                    continue;
                };
                created.extend(self.insert_if_absent(AxialCoord::new(q, r)));
            }
        }
        tracing::debug!(
            created = created.len(),
            total = self.tiles.len(),
            "grid expanded"
        );
        created
    }

    fn insert_if_absent(&mut self, coord: AxialCoord) -> Option<Tile> {
        if self.tiles.contains_key(&coord) {
            return None;
        }
        let tile = self.generate_tile(coord);
        tracing::trace!(%coord, biome = %tile.biome, variant = tile.variant, "tile generated");
        self.tiles.insert(coord, tile);
        Some(tile)
    }

    /// Compute a deterministic hash of the world state for comparison.
    /// Uses canonical (BTreeMap) iteration order.
    pub fn state_hash(&self) -> u64 {
        let mut h: u64 = 0xcbf2_9ce4_8422_2325; // FNV offset basis
        let mix = |h: &mut u64, bytes: &[u8]| {
            for &b in bytes {
                *h ^= b as u64;
                *h = h.wrapping_mul(0x0100_0000_01b3);
            }
        };
        mix(&mut h, self.seed().as_bytes());
        mix(&mut h, &self.hex_radius.to_le_bytes());
        for (coord, tile) in &self.tiles {
            mix(&mut h, &coord.q.to_le_bytes());
            mix(&mut h, &coord.r.to_le_bytes());
            mix(&mut h, tile.biome.name().as_bytes());
            mix(&mut h, &[tile.variant]);
        }
        h
    }
}
