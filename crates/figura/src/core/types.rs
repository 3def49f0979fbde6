//! Core type definitions for figure processing
//!
//! This module contains the figure records produced by the parser, the
//! geometry derived from them, and the styling vocabulary shared with
//! drawing surfaces.

use std::fmt;
use std::str::FromStr;

use chumsky::prelude::*;

use super::chumsky_utils::figure_id;
use super::error::FigureError;

/// Character set for rendering output
///
/// Controls which glyphs the terminal plot uses for strokes and the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum CharacterSet {
    /// Pure ASCII characters only: `+ - | o * .`
    Ascii,
    /// Unicode box-drawing characters and dots: `┌ ─ │ • ·`
    #[default]
    Unicode,
}

impl CharacterSet {
    /// Returns true if this character set uses only ASCII
    pub fn is_ascii(&self) -> bool {
        matches!(self, CharacterSet::Ascii)
    }
}

impl fmt::Display for CharacterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharacterSet::Ascii => write!(f, "ascii"),
            CharacterSet::Unicode => write!(f, "unicode"),
        }
    }
}

/// Stroke color of a primitive or label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Blue,
    Green,
    Red,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Blue => write!(f, "blue"),
            Color::Green => write!(f, "green"),
            Color::Red => write!(f, "red"),
        }
    }
}

/// Horizontal alignment of a text label relative to its anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum HAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Vertical alignment of a text label relative to its anchor point
///
/// `Top` puts the top edge of the text at the point, so the text hangs below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum VAlign {
    Top,
    #[default]
    Center,
    Bottom,
}

/// Alignment of a label relative to the point it is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct TextAnchor {
    pub horizontal: HAlign,
    pub vertical: VAlign,
}

impl TextAnchor {
    pub const CENTER: TextAnchor = TextAnchor {
        horizontal: HAlign::Center,
        vertical: VAlign::Center,
    };

    pub const TOP_LEFT: TextAnchor = TextAnchor {
        horizontal: HAlign::Left,
        vertical: VAlign::Top,
    };

    pub fn new(horizontal: HAlign, vertical: VAlign) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

/// A point in world coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Arithmetic mean of a set of points, `None` when the set is empty
    ///
    /// Each point is scaled before summing, so the mean of finite points is
    /// finite even near `f64::MAX`.
    pub fn mean(points: &[Point]) -> Option<Point> {
        if points.is_empty() {
            return None;
        }
        let n = points.len() as f64;
        let (mx, my) = points
            .iter()
            .fold((0.0, 0.0), |(mx, my), p| (mx + p.x / n, my + p.y / n));
        Some(Point::new(mx, my))
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Label token attached to a figure
///
/// One vowel, one ASCII letter, then two or three digits (`Aa10`, `eX123`).
/// Uniqueness is not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FigureId(String);

impl FigureId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Wrap text already matched by the figure id grammar
    pub(crate) fn from_matched(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl FromStr for FigureId {
    type Err = FigureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        figure_id()
            .then_ignore(end())
            .parse(s)
            .into_result()
            .map(Self::from_matched)
            .map_err(|_| FigureError::unrecognized(s))
    }
}

impl fmt::Display for FigureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FigureId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Circle given by its center and radius
///
/// Negative radii parse fine; it is up to the drawing surface to reject them.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub id: FigureId,
    pub center: Point,
    pub radius: f64,
}

/// Axis-aligned rectangle given by two opposite corners in any order
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub id: FigureId,
    pub corner1: Point,
    pub corner2: Point,
}

impl Rectangle {
    /// Drawing anchor: x of the first corner, y of the second
    pub fn anchor(&self) -> Point {
        Point::new(self.corner1.x, self.corner2.y)
    }

    pub fn width(&self) -> f64 {
        (self.corner2.x - self.corner1.x).abs()
    }

    pub fn height(&self) -> f64 {
        (self.corner2.y - self.corner1.y).abs()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    pub id: FigureId,
    pub vertex1: Point,
    pub vertex2: Point,
    pub vertex3: Point,
}

impl Triangle {
    pub fn vertices(&self) -> [Point; 3] {
        [self.vertex1, self.vertex2, self.vertex3]
    }

    /// Mean of the three vertices
    pub fn centroid(&self) -> Point {
        Point::mean(&self.vertices()).unwrap_or_default()
    }
}

/// The closed set of figure types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FigureKind {
    Circle,
    Rectangle,
    Triangle,
}

impl FigureKind {
    /// Fixed stroke color for every figure of this kind
    pub fn stroke(&self) -> Color {
        match self {
            FigureKind::Circle => Color::Blue,
            FigureKind::Rectangle => Color::Green,
            FigureKind::Triangle => Color::Red,
        }
    }
}

impl fmt::Display for FigureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FigureKind::Circle => write!(f, "circle"),
            FigureKind::Rectangle => write!(f, "rectangle"),
            FigureKind::Triangle => write!(f, "triangle"),
        }
    }
}

/// A fully parsed figure record
#[derive(Debug, Clone, PartialEq)]
pub enum Figure {
    Circle(Circle),
    Rectangle(Rectangle),
    Triangle(Triangle),
}

impl Figure {
    pub fn id(&self) -> &FigureId {
        match self {
            Figure::Circle(c) => &c.id,
            Figure::Rectangle(r) => &r.id,
            Figure::Triangle(t) => &t.id,
        }
    }

    pub fn kind(&self) -> FigureKind {
        match self {
            Figure::Circle(_) => FigureKind::Circle,
            Figure::Rectangle(_) => FigureKind::Rectangle,
            Figure::Triangle(_) => FigureKind::Triangle,
        }
    }

    pub fn stroke(&self) -> Color {
        self.kind().stroke()
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Figure::Circle(c) => write!(f, "{} @ {}, R={}", c.id, c.center, c.radius),
            Figure::Rectangle(r) => write!(f, "{} [{} to {}]", r.id, r.corner1, r.corner2),
            Figure::Triangle(t) => write!(
                f,
                "{} with vertices [{}, {}, {}]",
                t.id, t.vertex1, t.vertex2, t.vertex3
            ),
        }
    }
}

/// Result of parsing one descriptor line
#[derive(Debug)]
pub enum ParseOutcome {
    /// The line fully matched one grammar and every field converted
    Figure(Figure),
    /// The line matched no grammar
    Unrecognized(String),
    /// A grammar matched but a field failed to convert
    Error { line: String, reason: FigureError },
}

impl ParseOutcome {
    pub fn figure(&self) -> Option<&Figure> {
        match self {
            ParseOutcome::Figure(figure) => Some(figure),
            _ => None,
        }
    }

    pub fn is_figure(&self) -> bool {
        matches!(self, ParseOutcome::Figure(_))
    }
}
