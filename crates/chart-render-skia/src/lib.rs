// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia renderer crate; raster surface for chart-core, text shaping, and headless export helpers.

pub mod export;
pub mod surface;
pub mod text;

pub use export::{render_animation_strip, render_to_png, render_to_png_bytes, render_to_rgba8, RenderOptions};
pub use surface::{canvas_sweep, SkiaSurface};
pub use text::TextShaper;
