//! Terminal-facing output: status lines, swatches, and gallery layout.

pub mod render;
pub mod swatch;

pub use render::{GalleryEntry, RenderSink, Renderer};
