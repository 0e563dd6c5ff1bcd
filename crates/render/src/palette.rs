use glam::Vec3;

use hexworld_common::{AxialCoord, axial_to_cartesian};
use hexworld_kernel::{Biome, Tile};

/// Height of a tile prism; instances are centered half a tile below the ground.
const TILE_HEIGHT: f32 = 0.3;

/// RGB color of a biome variant. Out-of-range variants clamp to the nearest one.
pub fn biome_color(biome: Biome, variant: u8) -> u32 {
    let shades: [u32; 3] = match biome {
        Biome::Grassland => [0x66cc66, 0x55aa55, 0x77dd77],
        Biome::Desert => [0xffcc66, 0xffd27f, 0xe6b566],
        Biome::Water => [0x3399ff, 0x2277cc, 0x66ccff],
    };
    let index = usize::from(variant.clamp(1, 3)) - 1;
    shades[index]
}

/// Everything a view layer needs to place one tile mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileInstance {
    pub coord: AxialCoord,
    pub position: Vec3,
    pub color: u32,
}

impl TileInstance {
    pub fn from_tile(tile: &Tile, hex_radius: f64) -> Self {
        let p = axial_to_cartesian(tile.coord.q, tile.coord.r, hex_radius);
        Self {
            coord: tile.coord,
            position: Vec3::new(p.x as f32, -TILE_HEIGHT / 2.0, p.y as f32),
            color: biome_color(tile.biome, tile.variant),
        }
    }
}
