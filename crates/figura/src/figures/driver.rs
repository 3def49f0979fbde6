//! Drawing driver
//!
//! Walks an input file line by line, hands descriptor lines to the
//! [`FigureParser`], and turns every figure into draw and label calls on a
//! [`DrawingSurface`]. Per-line problems are reported and skipped; only
//! file-level I/O failures end a run early.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use anyhow::Result;
use tracing::{debug, error, info, info_span, warn};

use super::parser::{FigureParser, LineKind};
use crate::core::{
    check_points, DrawingSurface, Figure, FigureError, ParseOutcome, TextAnchor,
};

/// Input file used when none is given
pub const DEFAULT_INPUT: &str = "fich.txt";

/// Canvas setup applied by the driver
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            x_range: (-1000.0, 1000.0),
            y_range: (-1000.0, 1000.0),
            title: "Geometric Figures".to_string(),
            x_label: "X axis".to_string(),
            y_label: "Y axis".to_string(),
        }
    }
}

/// Why a descriptor line produced no figure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// No grammar matched
    Unrecognized,
    /// A grammar matched but a numeric field did not convert
    FieldConversion(String),
    /// The surface rejected the figure
    Draw(String),
}

/// A reported, non-fatal problem with one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based line number
    pub line_number: usize,
    pub content: String,
    pub kind: DiagnosticKind,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiagnosticKind::Unrecognized => write!(
                f,
                "Line {} ignored (invalid format): {}",
                self.line_number, self.content
            ),
            DiagnosticKind::FieldConversion(reason) | DiagnosticKind::Draw(reason) => write!(
                f,
                "Error processing line {}: {}: {}",
                self.line_number, self.content, reason
            ),
        }
    }
}

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RunOutcome {
    /// At least one figure was drawn and the canvas was shown
    Displayed,
    /// Nothing was drawn; the canvas was discarded
    #[default]
    NoFigures,
    /// The input file could not be found; no canvas work was done
    FileNotFound,
    /// Reading failed; the run stopped and the canvas was discarded
    IoError(String),
}

/// Summary of one driver run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DriveReport {
    /// Figures successfully drawn
    pub drawn: usize,
    /// Blank and comment lines skipped silently
    pub skipped: usize,
    pub diagnostics: Vec<Diagnostic>,
    pub outcome: RunOutcome,
}

/// Drives a drawing surface from a figure descriptor file
pub struct DrawingDriver<S: DrawingSurface> {
    parser: FigureParser,
    surface: S,
    config: PlotConfig,
}

impl<S: DrawingSurface> DrawingDriver<S> {
    /// Create a driver with the default canvas setup
    pub fn new(surface: S) -> Self {
        Self::with_config(surface, PlotConfig::default())
    }

    pub fn with_config(surface: S, config: PlotConfig) -> Self {
        Self {
            parser: FigureParser::new(),
            surface,
            config,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Process the file at `path`, writing progress and diagnostics to `out`
    ///
    /// Input problems never surface as `Err`: they are written to `out` and
    /// summarized in the report. `Err` means `out` or the surface's display
    /// failed.
    pub fn run<W: Write>(&mut self, path: &Path, out: &mut W) -> Result<DriveReport> {
        let span = info_span!("draw_figures", path = %path.display());
        let _enter = span.enter();

        writeln!(out, "Processing file: {}", path.display())?;
        writeln!(out)?;

        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let err = FigureError::file_not_found(path);
                error!(%err, "Input file missing");
                writeln!(out, "Error: {}", err)?;
                return Ok(DriveReport {
                    outcome: RunOutcome::FileNotFound,
                    ..DriveReport::default()
                });
            }
            Err(e) => {
                let err = FigureError::from(e);
                error!(%err, "Could not open input file");
                writeln!(out, "An error occurred: {}", err)?;
                return Ok(DriveReport {
                    outcome: RunOutcome::IoError(err.to_string()),
                    ..DriveReport::default()
                });
            }
        };

        self.run_reader(BufReader::new(file), out)
    }

    /// Process every line of `reader`
    pub fn run_reader<R: BufRead, W: Write>(
        &mut self,
        reader: R,
        out: &mut W,
    ) -> Result<DriveReport> {
        self.prepare_surface();
        let mut report = DriveReport::default();

        for (index, line) in reader.lines().enumerate() {
            let line_number = index + 1;
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    let err = FigureError::from(e);
                    error!(line_number, %err, "Read failed, stopping");
                    writeln!(out, "An error occurred: {}", err)?;
                    self.surface.discard();
                    report.outcome = RunOutcome::IoError(err.to_string());
                    return Ok(report);
                }
            };

            match LineKind::classify(&line) {
                LineKind::Blank | LineKind::Comment => report.skipped += 1,
                LineKind::Descriptor(text) => {
                    self.process_line(line_number, text, out, &mut report)?
                }
            }
        }

        self.finish(out, report)
    }

    fn prepare_surface(&mut self) {
        self.surface
            .set_bounds(self.config.x_range, self.config.y_range);
        self.surface.set_equal_aspect(true);
        self.surface.set_grid(true);
    }

    fn process_line<W: Write>(
        &mut self,
        line_number: usize,
        text: &str,
        out: &mut W,
        report: &mut DriveReport,
    ) -> Result<()> {
        let diagnostic = match self.parser.parse_line(text) {
            ParseOutcome::Figure(figure) => {
                writeln!(out, "Drawing {}: {}", figure.kind(), figure)?;
                match self.draw(&figure) {
                    Ok(()) => {
                        report.drawn += 1;
                        debug!(line_number, kind = %figure.kind(), id = %figure.id(), "Figure drawn");
                        return Ok(());
                    }
                    Err(e) => Diagnostic {
                        line_number,
                        content: text.to_string(),
                        kind: DiagnosticKind::Draw(e.to_string()),
                    },
                }
            }
            ParseOutcome::Error { line, reason } => Diagnostic {
                line_number,
                content: line,
                kind: DiagnosticKind::FieldConversion(reason.to_string()),
            },
            ParseOutcome::Unrecognized(line) => Diagnostic {
                line_number,
                content: line,
                kind: DiagnosticKind::Unrecognized,
            },
        };

        warn!(line_number, content = %diagnostic.content, kind = ?diagnostic.kind, "Line skipped");
        writeln!(out, "{}", diagnostic)?;
        report.diagnostics.push(diagnostic);
        Ok(())
    }

    /// Issue the draw and label calls for one figure
    fn draw(&mut self, figure: &Figure) -> Result<()> {
        let stroke = figure.stroke();
        let id = figure.id().as_str();
        match figure {
            Figure::Circle(c) => {
                self.surface.add_circle(c.center, c.radius, stroke)?;
                self.surface
                    .add_text(c.center, id, TextAnchor::CENTER, stroke)?;
            }
            Figure::Rectangle(r) => {
                self.surface
                    .add_rectangle(r.anchor(), r.width(), r.height(), stroke)?;
                self.surface
                    .add_text(r.corner1, id, TextAnchor::TOP_LEFT, stroke)?;
            }
            Figure::Triangle(t) => {
                // Reject the label point before anything reaches the surface
                let centroid = t.centroid();
                check_points(&[centroid])?;
                self.surface.add_polygon(&t.vertices(), stroke)?;
                self.surface
                    .add_text(centroid, id, TextAnchor::CENTER, stroke)?;
            }
        }
        Ok(())
    }

    fn finish<W: Write>(&mut self, out: &mut W, mut report: DriveReport) -> Result<DriveReport> {
        info!(
            drawn = report.drawn,
            skipped = report.skipped,
            diagnostics = report.diagnostics.len(),
            "Finished reading figures"
        );

        if report.drawn > 0 {
            self.surface.set_title(&self.config.title);
            self.surface
                .set_axis_labels(&self.config.x_label, &self.config.y_label);
            out.flush()?;
            self.surface.show()?;
            report.outcome = RunOutcome::Displayed;
        } else {
            writeln!(out)?;
            writeln!(out, "No valid figures were found or drawn.")?;
            self.surface.discard();
            report.outcome = RunOutcome::NoFigures;
        }
        Ok(report)
    }
}
