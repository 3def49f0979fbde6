//! Drawing surface backends
//!
//! [`AsciiPlot`] renders to a character grid for the terminal. The
//! [`RecordingSurface`](crate::core::RecordingSurface) in `core` captures
//! calls instead of drawing.

mod ascii;

pub use ascii::{AsciiPlot, AsciiPlotOptions, DisplaySink, PlotFrame, CELL_ASPECT};
