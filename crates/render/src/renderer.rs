use hexworld_common::AxialCoord;
use hexworld_kernel::{Biome, WorldModel};

/// Which part of the world to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderView {
    /// Hex the view is centered on.
    pub center: AxialCoord,
    /// Hex distance from the center that is drawn.
    pub radius: i32,
    /// Where to draw the agent, if anywhere.
    pub agent: Option<AxialCoord>,
}

impl Default for RenderView {
    fn default() -> Self {
        Self {
            center: AxialCoord::ORIGIN,
            radius: 5,
            agent: Some(AxialCoord::ORIGIN),
        }
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads world state and a view configuration, then produces
/// output. It never mutates the world; world truth is kernel-owned.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given world state and view.
    fn render(&self, world: &WorldModel, view: &RenderView) -> Self::Output;
}

/// Map glyph for a biome.
pub fn glyph(biome: Biome) -> char {
    match biome {
        Biome::Grassland => '.',
        Biome::Water => '~',
        Biome::Desert => ':',
    }
}

/// Text renderer drawing the hexagon of tiles around the view center.
///
/// Each axial row is indented by its distance from the center row so the
/// output keeps the hex shape. Ungenerated tiles are left blank and the agent
/// is drawn as `@`.
#[derive(Debug, Default)]
pub struct AsciiMapRenderer;

impl AsciiMapRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for AsciiMapRenderer {
    type Output = String;

    fn render(&self, world: &WorldModel, view: &RenderView) -> String {
        let radius = view.radius.max(0);
        let mut out = format!(
            "=== World (seed={:?}, tiles={}) ===\ncenter={} radius={}\n",
            world.seed(),
            world.tile_count(),
            view.center,
            radius
        );

        for dr in -radius..=radius {
            let mut line = " ".repeat(dr.unsigned_abs() as usize);
            let lo = (-radius).max(-dr - radius);
            let hi = radius.min(-dr + radius);
            for dq in lo..=hi {
                let coord = AxialCoord::new(view.center.q + dq, view.center.r + dr);
                let c = if view.agent == Some(coord) {
                    '@'
                } else {
                    world.get(coord).map_or(' ', |t| glyph(t.biome))
                };
                line.push(c);
                line.push(' ');
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }

        out
    }
}
