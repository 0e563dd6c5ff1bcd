use serde::Serialize;
use std::collections::BTreeMap;

use hexworld_common::{AxialCoord, axial_to_cartesian};
use hexworld_kernel::{Biome, WorldModel};

/// World inspector for developer tooling.
///
/// Provides read-only queries against the world state for debugging and
/// the CLI.
pub struct WorldInspector;

impl WorldInspector {
    /// Produce a summary of the world state.
    pub fn summary(world: &WorldModel) -> WorldSummary {
        let mut biomes: BTreeMap<Biome, usize> = Biome::ALL.into_iter().map(|b| (b, 0)).collect();
        for tile in world.tiles().values() {
            *biomes.entry(tile.biome).or_default() += 1;
        }
        WorldSummary {
            seed: world.seed().to_owned(),
            tile_count: world.tile_count(),
            biomes,
            state_hash: world.state_hash(),
        }
    }

    /// Details of one generated tile, or `None` if it does not exist yet.
    pub fn inspect_tile(world: &WorldModel, coord: AxialCoord) -> Option<TileInfo> {
        world.get(coord).map(|tile| {
            let p = axial_to_cartesian(coord.q, coord.r, world.hex_radius());
            TileInfo {
                coord,
                biome: tile.biome,
                variant: tile.variant,
                passable: tile.is_passable(),
                position: [p.x, p.y],
                noise: world.field().sample(coord),
            }
        })
    }

    /// Coordinates of all tiles of `biome`, in canonical order.
    pub fn tiles_of(world: &WorldModel, biome: Biome) -> Vec<AxialCoord> {
        world
            .tiles()
            .values()
            .filter(|t| t.biome == biome)
            .map(|t| t.coord)
            .collect()
    }
}

/// Summary of world state for the inspector.
#[derive(Debug, Clone, Serialize)]
pub struct WorldSummary {
    pub seed: String,
    pub tile_count: usize,
    pub biomes: BTreeMap<Biome, usize>,
    pub state_hash: u64,
}

impl WorldSummary {
    pub fn count(&self, biome: Biome) -> usize {
        self.biomes.get(&biome).copied().unwrap_or(0)
    }
}

impl std::fmt::Display for WorldSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "World: seed={:?} tiles={} grassland={} water={} desert={} hash={:#018x}",
            self.seed,
            self.tile_count,
            self.count(Biome::Grassland),
            self.count(Biome::Water),
            self.count(Biome::Desert),
            self.state_hash
        )
    }
}

/// Detailed info about a single tile.
#[derive(Debug, Clone, Serialize)]
pub struct TileInfo {
    pub coord: AxialCoord,
    pub biome: Biome,
    pub variant: u8,
    pub passable: bool,
    /// World-space `(x, z)` of the hex center.
    pub position: [f64; 2],
    pub noise: f64,
}

impl std::fmt::Display for TileInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Tile {} biome={} variant={} passable={} pos=({:.3}, {:.3}) noise={:.4}",
            self.coord,
            self.biome,
            self.variant,
            self.passable,
            self.position[0],
            self.position[1],
            self.noise
        )
    }
}
