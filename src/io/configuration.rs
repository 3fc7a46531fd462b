//! Drawing constants and runtime configuration defaults

use crate::composition::style::Unit;

// Reference layout template: 9 3/4 by 7 3/4 inches, five by five cells
/// Default grid width in drawing units
pub const DEFAULT_GRID_WIDTH: f64 = 9.0 + 3.0 / 4.0;
/// Default grid height in drawing units
pub const DEFAULT_GRID_HEIGHT: f64 = 7.0 + 3.0 / 4.0;
/// Default number of columns
pub const DEFAULT_COLUMNS: u32 = 5;
/// Default number of rows
pub const DEFAULT_ROWS: u32 = 5;
/// Default linear unit
pub const DEFAULT_UNIT: Unit = Unit::Inch;

// The offset grids sit a quarter cell to either side of the center grid
/// Fraction of a column pitch the offset layers are shifted by
pub const OFFSET_PITCH_FRACTION: f64 = 0.25;

// Output settings
/// Default output file
pub const DEFAULT_OUTPUT_PATH: &str = ".cache/test.svg";

// Layer names, in rendering order
/// Filled background rectangle
pub const BACKGROUND_LAYER: &str = "background";
/// Centered grid with both axes
pub const CENTER_LINES_LAYER: &str = "center-lines";
/// Column lines shifted left
pub const LEFT_OFFSET_LAYER: &str = "left-offset";
/// Column lines shifted right
pub const RIGHT_OFFSET_LAYER: &str = "right-offset";
/// Name of the aggregate view over every layer
pub const ALL_LAYER: &str = "all";

// Stroke weights in millimetres
/// Weight of the centered grid lines
pub const CENTER_LINE_WEIGHT_MM: f64 = 0.15;
/// Weight of the offset grid lines
pub const OFFSET_LINE_WEIGHT_MM: f64 = 0.3;

// Logging
/// Environment variable holding the log filter
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";
/// Filter used when the environment variable is unset
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Filter used when `--quiet` is given and the environment variable is unset
pub const QUIET_LOG_LEVEL: &str = "warn";
