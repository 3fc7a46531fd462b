//! Value types shared by all grid math
//!
//! Everything here is `Copy` and immutable once built. Constructors validate the
//! invariants of each type; the fields stay public so literal construction in
//! constant configuration remains possible, which is why the generator validates
//! its inputs again before use.

use crate::io::error::{Result, invalid_configuration};

/// A point in the drawing's linear unit
///
/// The z component is carried along but ignored by all 2D operations.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
    /// Depth coordinate (unused in 2D)
    pub z: f64,
}

impl Point {
    /// The origin `(0, 0, 0)`
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a point from its three components
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create a point on the XY plane
    pub const fn xy(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Translate this point by `offset` in x and y; z is kept as is
    pub fn translated(self, offset: Self) -> Self {
        Self {
            x: self.x + offset.x,
            y: self.y + offset.y,
            z: self.z,
        }
    }
}

/// Width and height of a grid, measured edge to edge around its local origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    /// Total span along x
    pub width: f64,
    /// Total span along y
    pub height: f64,
}

impl Extent {
    /// Create a validated extent
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if either side is not a finite, strictly
    /// positive number
    pub fn new(width: f64, height: f64) -> Result<Self> {
        let extent = Self { width, height };
        extent.validate()?;
        Ok(extent)
    }

    /// Check that both sides are finite and strictly positive
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` naming the first offending side
    pub fn validate(&self) -> Result<()> {
        validate_length("width", self.width)?;
        validate_length("height", self.height)
    }

    /// Half of the width; the x of the right edge
    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }

    /// Half of the height; the y of the top edge
    pub fn half_height(&self) -> f64 {
        self.height / 2.0
    }
}

fn validate_length(parameter: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(invalid_configuration(
            parameter,
            &value,
            &"must be a finite number",
        ));
    }
    if value <= 0.0 {
        return Err(invalid_configuration(
            parameter,
            &value,
            &"must be greater than zero",
        ));
    }
    Ok(())
}

/// Number of cells along each axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    /// Cells along x
    pub columns: u32,
    /// Cells along y
    pub rows: u32,
}

impl Dimensions {
    /// Create validated dimensions
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if either count is zero
    pub fn new(columns: u32, rows: u32) -> Result<Self> {
        let dimensions = Self { columns, rows };
        dimensions.validate()?;
        Ok(dimensions)
    }

    /// Check that both counts are at least one
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` naming the first zero count
    pub fn validate(&self) -> Result<()> {
        if self.columns == 0 {
            return Err(invalid_configuration(
                "columns",
                &self.columns,
                &"must be at least 1",
            ));
        }
        if self.rows == 0 {
            return Err(invalid_configuration(
                "rows",
                &self.rows,
                &"must be at least 1",
            ));
        }
        Ok(())
    }

    /// Distance between neighbouring column lines for the given extent
    pub fn column_pitch(&self, extent: &Extent) -> f64 {
        extent.width / f64::from(self.columns)
    }

    /// Distance between neighbouring row lines for the given extent
    pub fn row_pitch(&self, extent: &Extent) -> f64 {
        extent.height / f64::from(self.rows)
    }
}

/// Which interior lines to emit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisSelector {
    /// Emit vertical lines between columns
    pub columns: bool,
    /// Emit horizontal lines between rows
    pub rows: bool,
}

impl AxisSelector {
    /// Both column and row lines
    pub const BOTH: Self = Self {
        columns: true,
        rows: true,
    };

    /// Column lines only
    pub const COLUMNS: Self = Self {
        columns: true,
        rows: false,
    };

    /// Row lines only
    pub const ROWS: Self = Self {
        columns: false,
        rows: true,
    };

    /// Create a selector, rejecting the empty selection
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if both flags are false
    pub fn new(columns: bool, rows: bool) -> Result<Self> {
        let selector = Self { columns, rows };
        selector.validate()?;
        Ok(selector)
    }

    /// Check that at least one axis is selected
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if nothing would be drawn
    pub fn validate(&self) -> Result<()> {
        if self.columns || self.rows {
            Ok(())
        } else {
            Err(invalid_configuration(
                "axis_selector",
                &"columns=false, rows=false",
                &"at least one axis must be selected",
            ))
        }
    }
}

impl Default for AxisSelector {
    fn default() -> Self {
        Self::BOTH
    }
}

/// A straight segment between two points on the XY plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    /// First endpoint
    pub start: Point,
    /// Second endpoint
    pub end: Point,
}

impl LineSegment {
    /// Create a segment from two endpoints
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Translate both endpoints by `offset`
    pub fn translated(self, offset: Point) -> Self {
        Self {
            start: self.start.translated(offset),
            end: self.end.translated(offset),
        }
    }

    /// True when both endpoints share an x coordinate
    #[allow(clippy::float_cmp)]
    pub fn is_vertical(&self) -> bool {
        self.start.x == self.end.x
    }

    /// True when both endpoints share a y coordinate
    #[allow(clippy::float_cmp)]
    pub fn is_horizontal(&self) -> bool {
        self.start.y == self.end.y
    }

    /// Euclidean length on the XY plane
    pub fn length(&self) -> f64 {
        (self.end.x - self.start.x).hypot(self.end.y - self.start.y)
    }
}

/// Axis-aligned rectangle described by its center and extent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    /// Center of the rectangle
    pub center: Point,
    /// Full width and height
    pub extent: Extent,
}

impl Rectangle {
    /// Create a rectangle centered on `center`
    pub const fn new(center: Point, extent: Extent) -> Self {
        Self { center, extent }
    }

    /// Create a rectangle centered on the origin
    pub const fn centered(extent: Extent) -> Self {
        Self::new(Point::ORIGIN, extent)
    }

    /// Lower-left corner
    pub fn min(&self) -> Point {
        Point::xy(
            self.center.x - self.extent.half_width(),
            self.center.y - self.extent.half_height(),
        )
    }

    /// Upper-right corner
    pub fn max(&self) -> Point {
        Point::xy(
            self.center.x + self.extent.half_width(),
            self.center.y + self.extent.half_height(),
        )
    }

    /// Boundary edges, counter-clockwise starting at the lower-left corner
    pub fn edges(&self) -> [LineSegment; 4] {
        let min = self.min();
        let max = self.max();
        let bottom_right = Point::xy(max.x, min.y);
        let top_left = Point::xy(min.x, max.y);

        [
            LineSegment::new(min, bottom_right),
            LineSegment::new(bottom_right, max),
            LineSegment::new(max, top_left),
            LineSegment::new(top_left, min),
        ]
    }
}
