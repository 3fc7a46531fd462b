//! Layer composition for the grid drawing

/// Overlay of the centered and offset grids into named layers
pub mod composer;
/// Named layers and the composed drawing
pub mod layer;
/// Units, colors and stroke styles
pub mod style;

pub use composer::{DrawingConfig, GridComposer};
pub use layer::{Drawing, Layer};
