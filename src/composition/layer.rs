//! Named, styled shape collections and the drawing that owns them

use crate::composition::style::{LayerStyle, Unit};
use crate::geometry::shapes::ShapeList;
use crate::io::configuration::ALL_LAYER;

/// A named collection of shapes rendered with one style
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    name: String,
    style: LayerStyle,
    shapes: ShapeList,
}

impl Layer {
    /// Bind `shapes` to `name` with `style`
    pub fn new(name: impl Into<String>, style: LayerStyle, shapes: ShapeList) -> Self {
        Self {
            name: name.into(),
            style,
            shapes,
        }
    }

    /// Layer name, unique within a drawing
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rendering style
    pub const fn style(&self) -> &LayerStyle {
        &self.style
    }

    /// Shapes in insertion order
    pub const fn shapes(&self) -> &ShapeList {
        &self.shapes
    }
}

/// The composed result: ordered layers plus an aggregate of all their shapes
#[derive(Debug, Clone, PartialEq)]
pub struct Drawing {
    unit: Unit,
    layers: Vec<Layer>,
    all: ShapeList,
}

impl Drawing {
    /// Build a drawing; the aggregate view is derived from `layers`
    pub fn new(unit: Unit, layers: Vec<Layer>) -> Self {
        let all = ShapeList::concat(layers.iter().map(Layer::shapes));
        Self { unit, layers, all }
    }

    /// Unit every coordinate is expressed in
    pub const fn unit(&self) -> Unit {
        self.unit
    }

    /// Layers in rendering order
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Look up a layer by name
    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.name() == name)
    }

    /// Every layer's shapes concatenated in layer order
    pub const fn all(&self) -> &ShapeList {
        &self.all
    }

    /// Shapes of a named layer, or of the aggregate view for [`ALL_LAYER`]
    pub fn shapes(&self, name: &str) -> Option<&ShapeList> {
        if name == ALL_LAYER {
            Some(&self.all)
        } else {
            self.layer(name).map(Layer::shapes)
        }
    }
}
