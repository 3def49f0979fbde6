//! Figura - Draw geometric figures described in a text file
//!
//! A library for parsing figure descriptor lines (circles, rectangles and
//! triangles) and drawing them on a 2D surface.
//!
//! # Quick Start
//!
//! ```rust
//! use figura::parse_line;
//!
//! let outcome = parse_line("<Circulo-Aa10-(0,0)-5>");
//! assert!(outcome.is_figure());
//! ```
//!
//! # Advanced Usage
//!
//! For more control, drive a surface directly:
//!
//! ```rust
//! use figura::prelude::*;
//! use std::io::Cursor;
//!
//! let input = "# shapes\n<Circulo-Aa10-(0,0)-5>\n<Triangulo-Ii99-(0,0)-(4,0)-(0,3)>\n";
//!
//! let mut driver = DrawingDriver::new(RecordingSurface::new());
//! let mut log = Vec::new();
//! let report = driver.run_reader(Cursor::new(input), &mut log).unwrap();
//!
//! assert_eq!(report.drawn, 2);
//! assert_eq!(report.outcome, RunOutcome::Displayed);
//! assert!(driver.surface().was_shown());
//! ```

pub mod core;
pub mod figures;
pub mod plot;

use std::io::Write;
use std::path::Path;

pub use crate::core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        CharacterSet, Circle, Color, DrawingSurface, Figure, FigureError, FigureId, FigureKind,
        ParseOutcome, Point, RecordingSurface, Rectangle, SurfaceCommand, TextAnchor, Triangle,
    };
    pub use crate::figures::{
        Diagnostic, DiagnosticKind, DrawingDriver, DriveReport, FigureParser, PlotConfig,
        RunOutcome,
    };
    pub use crate::plot::{AsciiPlot, AsciiPlotOptions, PlotFrame};
}

/// Parse a single descriptor line
///
/// # Example
/// ```rust
/// use figura::{parse_line, Figure, ParseOutcome};
///
/// match parse_line("<Retangulo-Ee100-(0,0)-(10,5)>") {
///     ParseOutcome::Figure(Figure::Rectangle(r)) => assert_eq!(r.width(), 10.0),
///     other => panic!("unexpected {:?}", other),
/// }
/// assert!(matches!(parse_line("hello"), ParseOutcome::Unrecognized(_)));
/// ```
pub fn parse_line(line: &str) -> ParseOutcome {
    figures::FigureParser::new().parse_line(line)
}

/// Draw every figure in `path` on a terminal plot with default settings
///
/// Progress and diagnostics are written to `out`; the plot itself goes to
/// stdout when at least one figure was drawn.
pub fn draw_file<W: Write>(path: impl AsRef<Path>, out: &mut W) -> anyhow::Result<figures::DriveReport> {
    let plot = plot::AsciiPlot::new(plot::AsciiPlotOptions::default());
    let mut driver = figures::DrawingDriver::new(plot);
    driver.run(path.as_ref(), out)
}
