//! Overlay of the centered and quarter-cell-shifted grids
//!
//! The composed drawing always has four layers, in this order: the filled
//! background rectangle, the centered grid with both axes, and two column-only
//! grids shifted left and right by a quarter of the column pitch.

use std::path::PathBuf;

use crate::composition::layer::{Drawing, Layer};
use crate::composition::style::{Color, LayerStyle, LineType, Unit};
use crate::geometry::builder::LineBuilder;
use crate::geometry::lines::{Frame, GridLinesConfig};
use crate::geometry::primitives::{AxisSelector, Dimensions, Extent, Point, Rectangle};
use crate::geometry::shapes::ShapeList;
use crate::io::configuration::{
    BACKGROUND_LAYER, CENTER_LINE_WEIGHT_MM, CENTER_LINES_LAYER, DEFAULT_COLUMNS,
    DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_OUTPUT_PATH, DEFAULT_ROWS, DEFAULT_UNIT,
    LEFT_OFFSET_LAYER, OFFSET_LINE_WEIGHT_MM, OFFSET_PITCH_FRACTION, RIGHT_OFFSET_LAYER,
};
use crate::io::error::Result;

/// Everything a single run needs, fixed before composition starts
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingConfig {
    /// Unit every coordinate is expressed in
    pub unit: Unit,
    /// Edge-to-edge span of the grid
    pub extent: Extent,
    /// Cell counts along each axis
    pub dimensions: Dimensions,
    /// Where the drawing is written
    pub output: PathBuf,
}

impl DrawingConfig {
    /// Check extent and dimensions
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` for the first violated invariant
    pub fn validate(&self) -> Result<()> {
        self.extent.validate()?;
        self.dimensions.validate()
    }

    /// Horizontal shift of the offset layers
    pub fn offset_distance(&self) -> f64 {
        self.dimensions.column_pitch(&self.extent) * OFFSET_PITCH_FRACTION
    }
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            unit: DEFAULT_UNIT,
            extent: Extent {
                width: DEFAULT_GRID_WIDTH,
                height: DEFAULT_GRID_HEIGHT,
            },
            dimensions: Dimensions {
                columns: DEFAULT_COLUMNS,
                rows: DEFAULT_ROWS,
            },
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

/// Builds the layered grid drawing from a [`DrawingConfig`]
#[derive(Debug, Clone)]
pub struct GridComposer {
    config: DrawingConfig,
}

impl GridComposer {
    /// Create a composer for `config`
    pub const fn new(config: DrawingConfig) -> Self {
        Self { config }
    }

    /// Configuration this composer was created with
    pub const fn config(&self) -> &DrawingConfig {
        &self.config
    }

    /// Compose the background and the three line layers
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the extent or dimensions are invalid
    pub fn compose(&self) -> Result<Drawing> {
        self.config.validate()?;

        let extent = self.config.extent;
        let background = Rectangle::centered(extent);
        // Line layers are placed on the background's frame
        let frame = Frame::at(background.center);
        let base = GridLinesConfig::new(extent, self.config.dimensions).with_frame(frame);
        let shift = self.config.offset_distance();

        tracing::info!(
            width = extent.width,
            height = extent.height,
            columns = self.config.dimensions.columns,
            rows = self.config.dimensions.rows,
            unit = %self.config.unit,
            "building grid drawing"
        );

        let center_lines = LineBuilder::build(|builder| {
            builder.grid(&base)?;
            Ok(())
        })?;

        let left_offset = Self::offset_lines(&base, -shift)?;
        let right_offset = Self::offset_lines(&base, shift)?;

        let layers = vec![
            Layer::new(
                BACKGROUND_LAYER,
                LayerStyle::filled(Color::WHITE),
                ShapeList::from(background),
            ),
            Layer::new(
                CENTER_LINES_LAYER,
                LayerStyle::stroked(LineType::Center, CENTER_LINE_WEIGHT_MM),
                center_lines,
            ),
            Layer::new(
                LEFT_OFFSET_LAYER,
                LayerStyle::stroked(LineType::Dashed, OFFSET_LINE_WEIGHT_MM),
                left_offset,
            ),
            Layer::new(
                RIGHT_OFFSET_LAYER,
                LayerStyle::stroked(LineType::Dot, OFFSET_LINE_WEIGHT_MM),
                right_offset,
            ),
        ];

        for layer in &layers {
            if layer.shapes().is_empty() {
                tracing::warn!(layer = layer.name(), "layer has no shapes");
            } else {
                tracing::debug!(layer = layer.name(), shapes = layer.shapes().len());
            }
        }

        Ok(Drawing::new(self.config.unit, layers))
    }

    fn offset_lines(base: &GridLinesConfig, dx: f64) -> Result<ShapeList> {
        let config = base
            .with_axes(AxisSelector::COLUMNS)
            .with_offset(Point::new(dx, 0.0, 0.0));

        LineBuilder::build(|builder| {
            builder.grid(&config)?;
            Ok(())
        })
    }
}
