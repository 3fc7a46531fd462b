//! Contract between the composed drawing and a vector file writer

use std::path::Path;

use crate::composition::layer::Drawing;
use crate::composition::style::LayerStyle;
use crate::geometry::shapes::ShapeList;
use crate::io::error::Result;

/// A writer that serializes named, styled layers in registration order
pub trait LayeredExporter {
    /// Register a layer; shapes can only be attached to registered layers
    ///
    /// # Errors
    ///
    /// Returns `DuplicateLayer` if `name` is already registered
    fn add_layer(&mut self, name: &str, style: LayerStyle) -> Result<()>;

    /// Attach shapes to a registered layer
    ///
    /// # Errors
    ///
    /// Returns `UnknownLayer` if `layer` was never registered
    fn add_shapes(&mut self, layer: &str, shapes: &ShapeList) -> Result<()>;

    /// Serialize every registered layer to `path`
    ///
    /// # Errors
    ///
    /// Returns an error if there is nothing to draw or the file cannot be written
    fn write(&self, path: &Path) -> Result<()>;
}

/// Register every layer of `drawing` with `exporter`, then write it to `path`
///
/// # Errors
///
/// Propagates any error reported by the exporter
pub fn export_drawing<E>(drawing: &Drawing, exporter: &mut E, path: &Path) -> Result<()>
where
    E: LayeredExporter + ?Sized,
{
    for layer in drawing.layers() {
        exporter.add_layer(layer.name(), *layer.style())?;
        exporter.add_shapes(layer.name(), layer.shapes())?;
    }

    exporter.write(path)?;
    tracing::info!(path = %path.display(), "drawing written");
    Ok(())
}
