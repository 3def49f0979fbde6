//! Terminal plot surface
//!
//! Retains every primitive it is given and rasterizes them onto a
//! character canvas when shown. World bounds map linearly onto the plot
//! area; with equal aspect on, the row count is derived from the column
//! count, accounting for cells being about twice as tall as they are wide.

use std::f64::consts::TAU;
use std::fmt;
use std::io::Write;

use anyhow::Result;
use tracing::{debug, trace};

use crate::core::{
    check_points, check_radius, text_width, AsciiCanvas, BoxChars, CharacterSet, Color,
    DrawingSurface, HAlign, Point, StrokeChars, TextAnchor, VAlign,
};

/// Height-to-width ratio of a terminal character cell
pub const CELL_ASPECT: f64 = 2.0;

/// Cell coordinates are clamped to this magnitude before rasterizing
const CELL_LIMIT: f64 = 1e9;

/// Upper bound on samples taken along one circle outline
const MAX_ARC_SAMPLES: usize = 1 << 14;

/// Upper bound on grid lattice points along one axis
const MAX_GRID_TICKS: f64 = 512.0;

/// Receives the finished frame when the plot is shown
pub type DisplaySink = Box<dyn FnMut(&PlotFrame) -> Result<()>>;

/// Rendering options for [`AsciiPlot`]
#[derive(Debug, Clone, PartialEq)]
pub struct AsciiPlotOptions {
    /// Plot area width in columns, frame excluded
    pub width: usize,
    /// Plot area height in rows when equal aspect is off
    pub height: usize,
    /// World distance between grid lattice points
    pub grid_step: f64,
    pub style: CharacterSet,
}

impl Default for AsciiPlotOptions {
    fn default() -> Self {
        Self {
            width: 100,
            height: 40,
            grid_step: 250.0,
            style: CharacterSet::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Mark {
    Circle {
        center: Point,
        radius: f64,
        stroke: Color,
    },
    Rectangle {
        anchor: Point,
        width: f64,
        height: f64,
        stroke: Color,
    },
    Polygon {
        vertices: Vec<Point>,
        stroke: Color,
    },
    Text {
        at: Point,
        text: String,
        anchor: TextAnchor,
        color: Color,
    },
}

/// A rendered plot: title, framed plot area, bounds and axis labels
#[derive(Debug, Clone)]
pub struct PlotFrame {
    pub canvas: AsciiCanvas,
}

impl fmt::Display for PlotFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canvas)
    }
}

/// Maps world coordinates onto plot-area cells
#[derive(Debug, Clone, Copy)]
struct Viewport {
    x_range: (f64, f64),
    y_range: (f64, f64),
    cols: usize,
    rows: usize,
}

impl Viewport {
    fn x_scale(&self) -> f64 {
        (self.cols.saturating_sub(1)) as f64 / (self.x_range.1 - self.x_range.0)
    }

    fn y_scale(&self) -> f64 {
        (self.rows.saturating_sub(1)) as f64 / (self.y_range.1 - self.y_range.0)
    }

    fn col(&self, x: f64) -> i64 {
        ((x - self.x_range.0) * self.x_scale())
            .round()
            .clamp(-CELL_LIMIT, CELL_LIMIT) as i64
    }

    fn row(&self, y: f64) -> i64 {
        ((self.y_range.1 - y) * self.y_scale())
            .round()
            .clamp(-CELL_LIMIT, CELL_LIMIT) as i64
    }

    fn cell(&self, p: Point) -> (i64, i64) {
        (self.col(p.x), self.row(p.y))
    }
}

/// Drawing surface that renders to a character grid
pub struct AsciiPlot {
    options: AsciiPlotOptions,
    x_range: (f64, f64),
    y_range: (f64, f64),
    equal_aspect: bool,
    grid: bool,
    title: String,
    x_label: String,
    y_label: String,
    marks: Vec<Mark>,
    sink: DisplaySink,
    last_frame: Option<PlotFrame>,
}

impl AsciiPlot {
    /// Create a plot that prints plain text to stdout when shown
    pub fn new(options: AsciiPlotOptions) -> Self {
        Self::with_sink(options, Box::new(print_plain))
    }

    /// Create a plot that hands the finished frame to `sink`
    pub fn with_sink(options: AsciiPlotOptions, sink: DisplaySink) -> Self {
        Self {
            options,
            x_range: (-1.0, 1.0),
            y_range: (-1.0, 1.0),
            equal_aspect: false,
            grid: false,
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            marks: Vec::new(),
            sink,
            last_frame: None,
        }
    }

    /// The frame produced by the most recent `show`
    pub fn last_frame(&self) -> Option<&PlotFrame> {
        self.last_frame.as_ref()
    }

    /// Number of primitives and labels waiting to be rendered
    pub fn mark_count(&self) -> usize {
        self.marks.len()
    }

    fn viewport(&self) -> Viewport {
        let cols = self.options.width.max(2);
        let rows = if self.equal_aspect {
            let x_span = self.x_range.1 - self.x_range.0;
            let y_span = self.y_range.1 - self.y_range.0;
            (cols as f64 * y_span / x_span / CELL_ASPECT).round() as usize
        } else {
            self.options.height
        };
        Viewport {
            x_range: self.x_range,
            y_range: self.y_range,
            cols,
            rows: rows.max(2),
        }
    }

    /// Rasterize everything added so far into a frame
    pub fn render_frame(&self) -> PlotFrame {
        let view = self.viewport();
        let mut area = AsciiCanvas::new(view.cols, view.rows);

        if self.grid {
            self.draw_grid(&mut area, &view);
        }
        // Labels go on top of every stroke
        for mark in self.marks.iter().filter(|m| !matches!(m, Mark::Text { .. })) {
            self.draw_mark(&mut area, &view, mark);
        }
        for mark in self.marks.iter().filter(|m| matches!(m, Mark::Text { .. })) {
            self.draw_mark(&mut area, &view, mark);
        }

        PlotFrame {
            canvas: self.compose(&area, &view),
        }
    }

    fn draw_grid(&self, area: &mut AsciiCanvas, view: &Viewport) {
        let glyphs = StrokeChars::for_style(self.options.style);
        let (cols, rows) = (view.cols as i64, view.rows as i64);

        let axis_row = (self.y_range.0..=self.y_range.1)
            .contains(&0.0)
            .then(|| view.row(0.0));
        let axis_col = (self.x_range.0..=self.x_range.1)
            .contains(&0.0)
            .then(|| view.col(0.0));
        if let Some(row) = axis_row {
            area.draw_line((0, row), (cols - 1, row), glyphs.axis_horizontal, None);
        }
        if let Some(col) = axis_col {
            area.draw_line((col, 0), (col, rows - 1), glyphs.axis_vertical, None);
        }
        if let (Some(row), Some(col)) = (axis_row, axis_col) {
            area.plot(col, row, glyphs.origin, None);
        }

        let step = self.options.grid_step;
        if !(step.is_finite() && step > 0.0) {
            return;
        }
        for x in ticks(self.x_range, step) {
            for y in ticks(self.y_range, step) {
                area.plot_under(view.col(x), view.row(y), glyphs.grid);
            }
        }
    }

    fn draw_mark(&self, area: &mut AsciiCanvas, view: &Viewport, mark: &Mark) {
        let strokes = StrokeChars::for_style(self.options.style);
        match mark {
            Mark::Circle {
                center,
                radius,
                stroke,
            } => {
                let (rc, rr) = (radius * view.x_scale(), radius * view.y_scale());
                let samples = ((TAU * rc.max(rr)).ceil() as usize)
                    .saturating_mul(2)
                    .clamp(8, MAX_ARC_SAMPLES);
                for i in 0..samples {
                    let angle = TAU * i as f64 / samples as f64;
                    let p = Point::new(
                        center.x + radius * angle.cos(),
                        center.y + radius * angle.sin(),
                    );
                    let (c, r) = view.cell(p);
                    area.plot(c, r, strokes.arc, Some(*stroke));
                }
            }
            Mark::Rectangle {
                anchor,
                width,
                height,
                stroke,
            } => {
                let chars = BoxChars::rectangle(self.options.style);
                let (left, bottom) = view.cell(*anchor);
                let (right, top) = view.cell(Point::new(anchor.x + width, anchor.y + height));
                let color = Some(*stroke);
                area.draw_line((left, top), (right, top), chars.horizontal, color);
                area.draw_line((left, bottom), (right, bottom), chars.horizontal, color);
                if top != bottom {
                    area.draw_line((left, top), (left, bottom), chars.vertical, color);
                    area.draw_line((right, top), (right, bottom), chars.vertical, color);
                }
                if left != right && top != bottom {
                    area.plot(left, top, chars.top_left, color);
                    area.plot(right, top, chars.top_right, color);
                    area.plot(left, bottom, chars.bottom_left, color);
                    area.plot(right, bottom, chars.bottom_right, color);
                }
            }
            Mark::Polygon { vertices, stroke } => {
                let cells: Vec<(i64, i64)> = vertices.iter().map(|v| view.cell(*v)).collect();
                for (i, from) in cells.iter().enumerate() {
                    let to = cells[(i + 1) % cells.len()];
                    area.draw_line(*from, to, strokes.edge, Some(*stroke));
                }
            }
            Mark::Text {
                at,
                text,
                anchor,
                color,
            } => {
                let (col, row) = view.cell(*at);
                let width = text_width(text) as i64;
                let col = match anchor.horizontal {
                    HAlign::Left => col,
                    HAlign::Center => col - width / 2,
                    HAlign::Right => col - (width - 1).max(0),
                };
                let row = match anchor.vertical {
                    VAlign::Top => row + 1,
                    VAlign::Center => row,
                    VAlign::Bottom => row - 1,
                };
                area.draw_text(col, row, text, Some(*color));
            }
        }
    }

    /// Wrap the plot area with title, frame, bounds and axis labels
    fn compose(&self, area: &AsciiCanvas, view: &Viewport) -> AsciiCanvas {
        let frame = BoxChars::frame(self.options.style);
        let y_top = self.y_range.1.to_string();
        let y_bottom = self.y_range.0.to_string();
        let margin = text_width(&y_top).max(text_width(&y_bottom)) as i64 + 1;

        let (cols, rows) = (view.cols as i64, view.rows as i64);
        let left = margin;
        let right = margin + cols + 1;
        let top = 2;
        let bottom = top + rows + 1;
        let total_width = (right + 1) as usize;
        let total_height = (bottom + 3) as usize;
        let center = left + 1 + cols / 2;

        let mut out = AsciiCanvas::new(total_width, total_height);
        out.draw_text_centered(center, 0, &self.title, None);
        out.draw_text(0, 1, &self.y_label, None);

        out.draw_line((left, top), (right, top), frame.horizontal, None);
        out.draw_line((left, bottom), (right, bottom), frame.horizontal, None);
        out.draw_line((left, top), (left, bottom), frame.vertical, None);
        out.draw_line((right, top), (right, bottom), frame.vertical, None);
        out.plot(left, top, frame.top_left, None);
        out.plot(right, top, frame.top_right, None);
        out.plot(left, bottom, frame.bottom_left, None);
        out.plot(right, bottom, frame.bottom_right, None);

        for (r, row) in area.grid.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                out.plot(left + 1 + c as i64, top + 1 + r as i64, cell.glyph, cell.color);
            }
        }

        out.draw_text(margin - 1 - text_width(&y_top) as i64, top + 1, &y_top, None);
        out.draw_text(margin - 1 - text_width(&y_bottom) as i64, bottom - 1, &y_bottom, None);

        let x_left = self.x_range.0.to_string();
        let x_right = self.x_range.1.to_string();
        out.draw_text(left + 1, bottom + 1, &x_left, None);
        out.draw_text(right - text_width(&x_right) as i64, bottom + 1, &x_right, None);
        out.draw_text_centered(center, bottom + 2, &self.x_label, None);
        out
    }
}

/// Multiples of `step` inside `range`
/// Multiples of `step` inside `range`, widening the step when the range holds
/// more than [`MAX_GRID_TICKS`] of them
fn ticks(range: (f64, f64), step: f64) -> impl Iterator<Item = f64> {
    let step = step.max((range.1 - range.0).abs() / MAX_GRID_TICKS);
    let first = (range.0 / step).ceil() as i64;
    let last = (range.1 / step).floor() as i64;
    (first..=last).map(move |k| k as f64 * step)
}

fn print_plain(frame: &PlotFrame) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", frame)?;
    stdout.flush()?;
    Ok(())
}

impl DrawingSurface for AsciiPlot {
    fn set_bounds(&mut self, x_range: (f64, f64), y_range: (f64, f64)) {
        self.x_range = x_range;
        self.y_range = y_range;
    }

    fn set_equal_aspect(&mut self, equal: bool) {
        self.equal_aspect = equal;
    }

    fn set_grid(&mut self, visible: bool) {
        self.grid = visible;
    }

    fn add_circle(&mut self, center: Point, radius: f64, stroke: Color) -> Result<()> {
        check_points(&[center])?;
        check_radius(radius)?;
        trace!(%center, radius, "add_circle");
        self.marks.push(Mark::Circle {
            center,
            radius,
            stroke,
        });
        Ok(())
    }

    fn add_rectangle(
        &mut self,
        anchor: Point,
        width: f64,
        height: f64,
        stroke: Color,
    ) -> Result<()> {
        check_points(&[anchor, Point::new(width, height)])?;
        trace!(%anchor, width, height, "add_rectangle");
        self.marks.push(Mark::Rectangle {
            anchor,
            width,
            height,
            stroke,
        });
        Ok(())
    }

    fn add_polygon(&mut self, vertices: &[Point], stroke: Color) -> Result<()> {
        check_points(vertices)?;
        if vertices.is_empty() {
            anyhow::bail!(crate::core::FigureError::render_error("polygon has no vertices"));
        }
        trace!(vertex_count = vertices.len(), "add_polygon");
        self.marks.push(Mark::Polygon {
            vertices: vertices.to_vec(),
            stroke,
        });
        Ok(())
    }

    fn add_text(&mut self, at: Point, text: &str, anchor: TextAnchor, color: Color) -> Result<()> {
        check_points(&[at])?;
        self.marks.push(Mark::Text {
            at,
            text: text.to_string(),
            anchor,
            color,
        });
        Ok(())
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_axis_labels(&mut self, x_label: &str, y_label: &str) {
        self.x_label = x_label.to_string();
        self.y_label = y_label.to_string();
    }

    fn show(&mut self) -> Result<()> {
        let frame = self.render_frame();
        debug!(
            marks = self.marks.len(),
            width = frame.canvas.width,
            height = frame.canvas.height,
            "Showing plot"
        );
        (self.sink)(&frame)?;
        self.last_frame = Some(frame);
        Ok(())
    }

    fn discard(&mut self) {
        debug!(marks = self.marks.len(), "Discarding plot");
        self.marks.clear();
        self.last_frame = None;
    }
}
