//! Scoped accumulation of line segments
//!
//! A [`LineBuilder`] only lives inside the closure given to
//! [`LineBuilder::build`]; callers receive the finished [`ShapeList`] and never
//! see a partially built one.

use crate::geometry::lines::{GridLines, GridLinesConfig, Mode};
use crate::geometry::primitives::LineSegment;
use crate::geometry::shapes::{Shape, ShapeList};
use crate::io::error::Result;

/// Accumulates line segments for a single layer
#[derive(Debug, Default)]
pub struct LineBuilder {
    segments: Vec<LineSegment>,
}

impl LineBuilder {
    /// Run `scope` against a fresh builder and return what it accumulated
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `scope`; nothing is returned
    /// for a scope that failed
    pub fn build<F>(scope: F) -> Result<ShapeList>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        let mut builder = Self::default();
        scope(&mut builder)?;
        Ok(builder.finish())
    }

    /// Insert generated lines according to their mode
    ///
    /// Returns the number of segments the builder holds afterwards.
    pub fn insert(&mut self, lines: GridLines) -> usize {
        match lines.mode() {
            Mode::Add => self.segments.extend(lines.into_segments()),
            Mode::Replace => self.segments = lines.into_segments(),
            Mode::Private => {}
        }
        self.segments.len()
    }

    /// Generate grid lines from `config` and insert them
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if `config` violates any invariant
    pub fn grid(&mut self, config: &GridLinesConfig) -> Result<usize> {
        let lines = GridLines::new(config)?;
        Ok(self.insert(lines))
    }

    /// Add a single segment
    pub fn line(&mut self, segment: LineSegment) {
        self.segments.push(segment);
    }

    /// Segments accumulated so far
    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    fn finish(self) -> ShapeList {
        self.segments.into_iter().map(Shape::Edge).collect()
    }
}
