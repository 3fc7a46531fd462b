//! Grid geometry: value types, line generation and scoped accumulation

/// Scoped line accumulation yielding immutable shape lists
pub mod builder;
/// Interior grid-line generation
pub mod lines;
/// Point, extent, dimension and segment value types
pub mod primitives;
/// Shape collections shared by composition and export
pub mod shapes;

pub use lines::{GridLines, GridLinesConfig, generate_grid_lines};
pub use primitives::{AxisSelector, Dimensions, Extent, LineSegment, Point, Rectangle};
pub use shapes::{Shape, ShapeList};
