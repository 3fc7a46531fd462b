//! Interior grid-line generation
//!
//! A grid is laid out in a local frame centered on its own origin. Only the
//! interior lines are produced: a grid of `n` columns yields `n - 1` vertical
//! lines, the outer boundary belongs to whatever the grid is drawn on.

use crate::geometry::primitives::{AxisSelector, Dimensions, Extent, LineSegment, Point};
use crate::io::error::{Result, empty_result};

/// Placement of a grid's local frame in drawing coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Frame {
    /// Drawing-space position of the local origin
    pub origin: Point,
}

impl Frame {
    /// The drawing's XY plane with its origin at `(0, 0)`
    pub const XY: Self = Self {
        origin: Point::ORIGIN,
    };

    /// A frame whose local origin sits at `origin`
    pub const fn at(origin: Point) -> Self {
        Self { origin }
    }

    /// Map a segment from local to drawing coordinates
    pub fn to_drawing(&self, segment: LineSegment) -> LineSegment {
        segment.translated(self.origin)
    }
}

/// How generated lines combine with what a builder already holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Append to the accumulated lines
    #[default]
    Add,
    /// Discard the accumulated lines, keep only these
    Replace,
    /// Generate without adding to the builder
    Private,
}

/// Every option a grid-line generation recognizes
///
/// Defaults: both axes, no offset, [`Frame::XY`], [`Mode::Add`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLinesConfig {
    /// Edge-to-edge span of the grid
    pub extent: Extent,
    /// Cell counts along each axis
    pub dimensions: Dimensions,
    /// Which interior lines to emit
    pub axes: AxisSelector,
    /// Shift of column lines along x and of row lines along y
    pub offset: Point,
    /// Where the local frame sits in the drawing
    pub frame: Frame,
    /// How the lines are inserted into a [`LineBuilder`](crate::geometry::builder::LineBuilder)
    pub mode: Mode,
}

impl GridLinesConfig {
    /// Configuration with defaults for everything but size and cell counts
    pub const fn new(extent: Extent, dimensions: Dimensions) -> Self {
        Self {
            extent,
            dimensions,
            axes: AxisSelector::BOTH,
            offset: Point::ORIGIN,
            frame: Frame::XY,
            mode: Mode::Add,
        }
    }

    /// Replace the axis selection
    #[must_use]
    pub const fn with_axes(mut self, axes: AxisSelector) -> Self {
        self.axes = axes;
        self
    }

    /// Replace the offset
    #[must_use]
    pub const fn with_offset(mut self, offset: Point) -> Self {
        self.offset = offset;
        self
    }

    /// Replace the target frame
    #[must_use]
    pub const fn with_frame(mut self, frame: Frame) -> Self {
        self.frame = frame;
        self
    }

    /// Replace the insertion mode
    #[must_use]
    pub const fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Check extent, dimensions and axis selection
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` for the first violated invariant
    pub fn validate(&self) -> Result<()> {
        self.axes.validate()?;
        self.extent.validate()?;
        self.dimensions.validate()
    }
}

/// Generate the interior lines of a grid in its local frame
///
/// Column lines come first, left to right, then row lines, bottom to top.
/// Each column line runs from the top edge to the bottom edge and is shifted
/// by `config.offset.x` only; each row line runs from the left edge to the
/// right edge and is shifted by `config.offset.y` only (z ignored). Lines
/// always span the full extent. The result may be empty: a single-cell axis
/// has no interior lines. `config.frame` and `config.mode` are not applied
/// here; see [`GridLines::new`].
///
/// # Errors
///
/// Returns `InvalidConfiguration` if the axis selection is empty or the
/// extent or dimensions are not strictly positive
pub fn generate_grid_lines(config: &GridLinesConfig) -> Result<Vec<LineSegment>> {
    config.validate()?;

    let GridLinesConfig {
        extent,
        dimensions,
        axes,
        offset,
        ..
    } = *config;

    let right = extent.half_width();
    let left = -right;
    let top = extent.half_height();
    let bottom = -top;

    let column_pitch = dimensions.column_pitch(&extent);
    let row_pitch = dimensions.row_pitch(&extent);

    let column_count = if axes.columns { dimensions.columns - 1 } else { 0 };
    let row_count = if axes.rows { dimensions.rows - 1 } else { 0 };
    let mut segments = Vec::with_capacity(column_count as usize + row_count as usize);

    for column in 1..=column_count {
        let x = offset.x + left + column_pitch * f64::from(column);
        segments.push(LineSegment::new(Point::xy(x, top), Point::xy(x, bottom)));
    }

    for row in 1..=row_count {
        let y = offset.y + bottom + row_pitch * f64::from(row);
        tracing::debug!(row, y, "row line");
        segments.push(LineSegment::new(Point::xy(left, y), Point::xy(right, y)));
    }

    Ok(segments)
}

/// Grid lines placed in drawing coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct GridLines {
    segments: Vec<LineSegment>,
    mode: Mode,
}

impl GridLines {
    /// Validate `config`, generate its lines and map them through its frame
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if `config` violates any invariant
    pub fn new(config: &GridLinesConfig) -> Result<Self> {
        let segments = generate_grid_lines(config)?
            .into_iter()
            .map(|segment| config.frame.to_drawing(segment))
            .collect::<Vec<_>>();

        tracing::debug!(count = segments.len(), "generated grid lines");

        Ok(Self {
            segments,
            mode: config.mode,
        })
    }

    /// Generated segments in emission order
    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    /// Number of generated segments
    pub const fn len(&self) -> usize {
        self.segments.len()
    }

    /// True for a degenerate grid with no interior lines
    pub const fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Insertion mode requested at construction
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Consume into the generated segments
    pub fn into_segments(self) -> Vec<LineSegment> {
        self.segments
    }

    /// Reject a degenerate grid for callers that need at least one line
    ///
    /// # Errors
    ///
    /// Returns `EmptyResult` if no segment was generated
    pub fn require_non_empty(self) -> Result<Self> {
        if self.is_empty() {
            Err(empty_result(&"grid lines"))
        } else {
            Ok(self)
        }
    }
}
