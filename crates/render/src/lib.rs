//! Rendering Adapter: renderer-agnostic view of the hex world.
//!
//! # Invariants
//! - Renderers cannot mutate world truth; they read tiles and a view.
//! - Every tile maps to exactly one instance, keyed by its coordinate.
//!
//! # Workaround
//! Provides a trait-based renderer interface with an ASCII map renderer as a
//! workaround for a GPU backend. The trait is stable; swap in a mesh-based
//! implementation without changing consumers.

mod palette;
mod renderer;

pub use palette::{TileInstance, biome_color};
pub use renderer::{AsciiMapRenderer, RenderView, Renderer, glyph};

pub fn crate_info() -> &'static str {
    "hexworld-render v0.1.0"
}
