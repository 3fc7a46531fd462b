//! Units, colors and stroke styles used when rendering layers

use clap::ValueEnum;
use std::fmt;

/// Linear unit every drawing coordinate is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Unit {
    /// Millimetres
    #[value(name = "mm")]
    Millimeter,
    /// Centimetres
    #[value(name = "cm")]
    Centimeter,
    /// Inches
    #[default]
    #[value(name = "in")]
    Inch,
}

impl Unit {
    /// Suffix understood by SVG length attributes
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Millimeter => "mm",
            Self::Centimeter => "cm",
            Self::Inch => "in",
        }
    }

    /// How many millimetres one unit spans
    pub const fn millimeters(self) -> f64 {
        match self {
            Self::Millimeter => 1.0,
            Self::Centimeter => 10.0,
            Self::Inch => 25.4,
        }
    }

    /// Convert a length given in millimetres into this unit
    pub fn from_millimeters(self, length: f64) -> f64 {
        length / self.millimeters()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// RGB color with components in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red
    pub r: f64,
    /// Green
    pub g: f64,
    /// Blue
    pub b: f64,
}

impl Color {
    /// Opaque white
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    /// Opaque black
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a color; components are clamped when rendered
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb` notation
    pub fn to_hex(self) -> String {
        let channel = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )
    }
}

/// Dash family of a stroked line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineType {
    /// Unbroken line
    #[default]
    Continuous,
    /// Long dash, gap, short dash, gap
    Center,
    /// Evenly spaced dashes
    Dashed,
    /// Closely spaced dots
    Dot,
}

impl LineType {
    /// Alternating dash and gap lengths in millimetres; empty for continuous
    ///
    /// A zero-length dash renders as a dot with a round line cap.
    pub const fn pattern(self) -> &'static [f64] {
        match self {
            Self::Continuous => &[],
            Self::Center => &[31.75, 6.35, 6.35, 6.35],
            Self::Dashed => &[12.7, 6.35],
            Self::Dot => &[0.0, 3.175],
        }
    }

    /// Whether the pattern relies on round caps to show its dots
    pub const fn needs_round_cap(self) -> bool {
        matches!(self, Self::Dot)
    }
}

/// Line type and weight of a stroked layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Dash family
    pub line_type: LineType,
    /// Stroke width in millimetres
    pub weight: f64,
    /// Stroke color
    pub color: Color,
}

impl Stroke {
    /// Black stroke of the given type and weight
    pub const fn new(line_type: LineType, weight: f64) -> Self {
        Self {
            line_type,
            weight,
            color: Color::BLACK,
        }
    }
}

/// Rendering style of one layer
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayerStyle {
    /// Fill applied to faces; `None` leaves them unfilled
    pub fill: Option<Color>,
    /// Stroke applied to edges and faces; `None` draws no outline
    pub stroke: Option<Stroke>,
}

impl LayerStyle {
    /// Fill-only style
    pub const fn filled(color: Color) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
        }
    }

    /// Stroke-only style
    pub const fn stroked(line_type: LineType, weight: f64) -> Self {
        Self {
            fill: None,
            stroke: Some(Stroke::new(line_type, weight)),
        }
    }
}
