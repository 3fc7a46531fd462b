//! Shape collections handed from composition to export

use crate::geometry::primitives::{LineSegment, Point, Rectangle};

/// A single drawable shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// A filled rectangular face
    Face(Rectangle),
    /// A stroked line segment
    Edge(LineSegment),
}

impl Shape {
    /// Lower-left and upper-right corners of the shape's bounding box
    pub fn bounds(&self) -> (Point, Point) {
        match self {
            Self::Face(rectangle) => (rectangle.min(), rectangle.max()),
            Self::Edge(segment) => (
                Point::xy(
                    segment.start.x.min(segment.end.x),
                    segment.start.y.min(segment.end.y),
                ),
                Point::xy(
                    segment.start.x.max(segment.end.x),
                    segment.start.y.max(segment.end.y),
                ),
            ),
        }
    }
}

/// Ordered, immutable collection of shapes
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShapeList {
    shapes: Vec<Shape>,
}

impl ShapeList {
    /// Number of shapes of any kind
    pub const fn len(&self) -> usize {
        self.shapes.len()
    }

    /// True when the collection holds nothing
    pub const fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Iterate over all shapes in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.shapes.iter()
    }

    /// The line segments, in insertion order
    pub fn edges(&self) -> impl Iterator<Item = &LineSegment> + '_ {
        self.shapes.iter().filter_map(|shape| match shape {
            Shape::Edge(segment) => Some(segment),
            Shape::Face(_) => None,
        })
    }

    /// The rectangular faces, in insertion order
    pub fn faces(&self) -> impl Iterator<Item = &Rectangle> + '_ {
        self.shapes.iter().filter_map(|shape| match shape {
            Shape::Face(rectangle) => Some(rectangle),
            Shape::Edge(_) => None,
        })
    }

    /// Combined bounding box, or `None` for an empty list
    pub fn bounds(&self) -> Option<(Point, Point)> {
        self.shapes
            .iter()
            .map(Shape::bounds)
            .reduce(|(min_a, max_a), (min_b, max_b)| {
                (
                    Point::xy(min_a.x.min(min_b.x), min_a.y.min(min_b.y)),
                    Point::xy(max_a.x.max(max_b.x), max_a.y.max(max_b.y)),
                )
            })
    }

    /// Concatenate several lists, preserving each one's order
    pub fn concat<'a>(lists: impl IntoIterator<Item = &'a Self>) -> Self {
        lists.into_iter().flat_map(Self::iter).copied().collect()
    }
}

impl FromIterator<Shape> for ShapeList {
    fn from_iter<I: IntoIterator<Item = Shape>>(iter: I) -> Self {
        Self {
            shapes: iter.into_iter().collect(),
        }
    }
}

impl From<Rectangle> for ShapeList {
    /// The face followed by its four boundary edges
    fn from(rectangle: Rectangle) -> Self {
        std::iter::once(Shape::Face(rectangle))
            .chain(rectangle.edges().into_iter().map(Shape::Edge))
            .collect()
    }
}

impl<'a> IntoIterator for &'a ShapeList {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}
