//! SVG serialization of layered drawings
//!
//! Coordinates are written in drawing units with a y-flip so +y points up.
//! The document's physical size carries the unit suffix, so one user unit in
//! the `viewBox` equals one drawing unit. Each layer becomes a `<g>` whose
//! attributes carry the layer style; shapes inherit it.

use std::path::Path;

use crate::composition::style::{LayerStyle, Stroke, Unit};
use crate::geometry::primitives::{LineSegment, Point, Rectangle};
use crate::geometry::shapes::{Shape, ShapeList};
use crate::io::error::{GridError, Result, empty_result};
use crate::io::export::LayeredExporter;

#[derive(Debug, Clone)]
struct SvgLayer {
    name: String,
    style: LayerStyle,
    shapes: Vec<Shape>,
}

/// Writes registered layers to a single SVG document
#[derive(Debug, Clone)]
pub struct SvgExporter {
    unit: Unit,
    layers: Vec<SvgLayer>,
}

impl SvgExporter {
    /// Create an exporter whose coordinates are in `unit`
    pub const fn new(unit: Unit) -> Self {
        Self {
            unit,
            layers: Vec::new(),
        }
    }

    /// Unit coordinates are interpreted in
    pub const fn unit(&self) -> Unit {
        self.unit
    }

    /// Registered layer names in registration order
    pub fn layer_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.layers.iter().map(|layer| layer.name.as_str())
    }

    /// Render the SVG document
    ///
    /// # Errors
    ///
    /// Returns `EmptyResult` if no registered layer holds a shape
    pub fn render(&self) -> Result<String> {
        let all: ShapeList = self
            .layers
            .iter()
            .flat_map(|layer| layer.shapes.iter().copied())
            .collect();
        let (min, max) = all
            .bounds()
            .ok_or_else(|| empty_result(&"SVG export"))?;

        let width = max.x - min.x;
        let height = max.y - min.y;
        let suffix = self.unit.suffix();

        let mut svg = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n");
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}{suffix}\" height=\"{}{suffix}\" viewBox=\"{} {} {} {}\">\n",
            number(width),
            number(height),
            number(min.x),
            number(-max.y),
            number(width),
            number(height),
        ));
        svg.push_str("  <g transform=\"scale(1,-1)\">\n");

        for layer in &self.layers {
            svg.push_str(&format!(
                "    <g id=\"{}\"{}>\n",
                escape(&layer.name),
                self.style_attributes(&layer.style)
            ));
            for shape in &layer.shapes {
                svg.push_str("      ");
                svg.push_str(&shape_element(shape));
                svg.push('\n');
            }
            svg.push_str("    </g>\n");
        }

        svg.push_str("  </g>\n</svg>\n");
        Ok(svg)
    }

    fn style_attributes(&self, style: &LayerStyle) -> String {
        let fill = style
            .fill
            .map_or_else(|| "none".to_string(), |color| color.to_hex());
        let mut attributes = format!(" fill=\"{fill}\"");

        match style.stroke {
            Some(stroke) => attributes.push_str(&self.stroke_attributes(&stroke)),
            None => attributes.push_str(" stroke=\"none\""),
        }

        attributes
    }

    fn stroke_attributes(&self, stroke: &Stroke) -> String {
        let mut attributes = format!(
            " stroke=\"{}\" stroke-width=\"{}\"",
            stroke.color.to_hex(),
            number(self.unit.from_millimeters(stroke.weight))
        );

        let pattern = stroke.line_type.pattern();
        if !pattern.is_empty() {
            let dashes = pattern
                .iter()
                .map(|&length| number(self.unit.from_millimeters(length)))
                .collect::<Vec<_>>()
                .join(",");
            attributes.push_str(&format!(" stroke-dasharray=\"{dashes}\""));
        }
        if stroke.line_type.needs_round_cap() {
            attributes.push_str(" stroke-linecap=\"round\"");
        }

        attributes
    }

    fn layer_mut(&mut self, name: &str) -> Result<&mut SvgLayer> {
        self.layers
            .iter_mut()
            .find(|layer| layer.name == name)
            .ok_or_else(|| GridError::UnknownLayer {
                name: name.to_string(),
            })
    }
}

impl LayeredExporter for SvgExporter {
    fn add_layer(&mut self, name: &str, style: LayerStyle) -> Result<()> {
        if self.layers.iter().any(|layer| layer.name == name) {
            return Err(GridError::DuplicateLayer {
                name: name.to_string(),
            });
        }

        self.layers.push(SvgLayer {
            name: name.to_string(),
            style,
            shapes: Vec::new(),
        });
        Ok(())
    }

    fn add_shapes(&mut self, layer: &str, shapes: &ShapeList) -> Result<()> {
        self.layer_mut(layer)?.shapes.extend(shapes.iter().copied());
        Ok(())
    }

    fn write(&self, path: &Path) -> Result<()> {
        let svg = self.render()?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| GridError::FileSystem {
                    path: parent.to_path_buf(),
                    operation: "create directory",
                    source: e,
                })?;
            }
        }

        std::fs::write(path, svg).map_err(|e| GridError::FileSystem {
            path: path.to_path_buf(),
            operation: "write file",
            source: e,
        })
    }
}

fn shape_element(shape: &Shape) -> String {
    match shape {
        Shape::Face(rectangle) => rect_element(rectangle),
        Shape::Edge(segment) => line_element(segment),
    }
}

fn rect_element(rectangle: &Rectangle) -> String {
    let min: Point = rectangle.min();
    format!(
        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"/>",
        number(min.x),
        number(min.y),
        number(rectangle.extent.width),
        number(rectangle.extent.height)
    )
}

fn line_element(segment: &LineSegment) -> String {
    format!(
        "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"/>",
        number(segment.start.x),
        number(segment.start.y),
        number(segment.end.x),
        number(segment.end.y)
    )
}

/// Fixed six-decimal formatting without trailing zeros
fn number(value: f64) -> String {
    let formatted = format!("{value:.6}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
