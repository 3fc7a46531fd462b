//! Command-line interface for generating the grid drawing

use crate::composition::composer::{DrawingConfig, GridComposer};
use crate::composition::layer::Drawing;
use crate::composition::style::Unit;
use crate::geometry::primitives::{Dimensions, Extent};
use crate::io::configuration::{
    CENTER_LINES_LAYER, DEFAULT_COLUMNS, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH,
    DEFAULT_OUTPUT_PATH, DEFAULT_ROWS, DEFAULT_UNIT, LEFT_OFFSET_LAYER, RIGHT_OFFSET_LAYER,
};
use crate::io::error::{Result, empty_result};
use crate::io::export::export_drawing;
use crate::io::svg::SvgExporter;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "gridlines")]
#[command(
    author,
    version,
    about = "Generate a layered grid-line layout template as SVG"
)]
/// Command-line arguments for the drawing generator
pub struct Cli {
    /// Output SVG file
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Grid width in drawing units
    #[arg(short = 'W', long, default_value_t = DEFAULT_GRID_WIDTH)]
    pub width: f64,

    /// Grid height in drawing units
    #[arg(short = 'H', long, default_value_t = DEFAULT_GRID_HEIGHT)]
    pub height: f64,

    /// Number of columns
    #[arg(short, long, default_value_t = DEFAULT_COLUMNS)]
    pub columns: u32,

    /// Number of rows
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    pub rows: u32,

    /// Linear unit of all dimensions
    #[arg(short, long, value_enum, default_value_t = DEFAULT_UNIT)]
    pub unit: Unit,

    /// Fail instead of writing a drawing with an empty line layer
    #[arg(short, long)]
    pub strict: bool,

    /// Only log warnings and errors unless LOG_LEVEL is set
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Validated drawing configuration from the parsed arguments
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the size or cell counts are invalid
    pub fn to_config(&self) -> Result<DrawingConfig> {
        Ok(DrawingConfig {
            unit: self.unit,
            extent: Extent::new(self.width, self.height)?,
            dimensions: Dimensions::new(self.columns, self.rows)?,
            output: self.output.clone(),
        })
    }
}

/// Runs compose, export and write for one set of arguments
pub struct DrawingProcessor {
    cli: Cli,
}

impl DrawingProcessor {
    /// Create a processor for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Compose the drawing and write it to the configured output
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, a required layer is
    /// empty in strict mode, or the file cannot be written
    pub fn process(&self) -> Result<Drawing> {
        let start_time = Instant::now();
        let config = self.cli.to_config()?;
        let output = config.output.clone();

        let drawing = GridComposer::new(config).compose()?;
        if self.cli.strict {
            Self::require_line_layers(&drawing)?;
        }

        let mut exporter = SvgExporter::new(drawing.unit());
        export_drawing(&drawing, &mut exporter, &output)?;

        tracing::info!(
            shapes = drawing.all().len(),
            elapsed_ms = start_time.elapsed().as_millis(),
            "done"
        );
        Ok(drawing)
    }

    fn require_line_layers(drawing: &Drawing) -> Result<()> {
        for name in [CENTER_LINES_LAYER, LEFT_OFFSET_LAYER, RIGHT_OFFSET_LAYER] {
            let empty = drawing
                .layer(name)
                .is_none_or(|layer| layer.shapes().is_empty());
            if empty {
                return Err(empty_result(&format!("layer '{name}'")));
            }
        }
        Ok(())
    }
}
