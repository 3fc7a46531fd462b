//! Parametric grid-line layout templates exported as layered SVG drawings
//!
//! A grid of a given extent and cell count is reduced to its interior lines.
//! Three such grids, one centered and two shifted a quarter column to either
//! side, are overlaid on a filled background and written as separate layers.

#![forbid(unsafe_code)]

/// Layer composition of the grid drawing
pub mod composition;
/// Grid geometry and line generation
pub mod geometry;
/// Input/output operations and error handling
pub mod io;

pub use io::error::{GridError, Result};
