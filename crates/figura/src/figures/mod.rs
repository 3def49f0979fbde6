//! Figure descriptor parsing and the drawing driver

mod driver;
mod grammar;
mod parser;

pub use driver::{
    Diagnostic, DiagnosticKind, DrawingDriver, DriveReport, PlotConfig, RunOutcome, DEFAULT_INPUT,
};
pub use grammar::{Grammar, RawFigure, RawPoint};
pub use parser::{FigureParser, LineKind, COMMENT_PREFIX};
