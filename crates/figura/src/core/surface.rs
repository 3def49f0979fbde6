//! Drawing surface trait
//!
//! A drawing surface is the 2D canvas the driver issues primitive draw
//! commands to. It owns coordinate bounds, styling of the frame, and the
//! final blocking display.

use anyhow::Result;

use super::types::{Color, Point, TextAnchor};

/// Core trait for drawing surfaces
///
/// Draw calls return `Result` because a backend may refuse a primitive it
/// cannot render, such as a circle with a negative radius.
///
/// # Example
/// ```
/// use figura::core::{Color, DrawingSurface, Point, RecordingSurface, TextAnchor};
///
/// let mut surface = RecordingSurface::new();
/// surface.set_bounds((-10.0, 10.0), (-10.0, 10.0));
/// surface.add_circle(Point::new(0.0, 0.0), 5.0, Color::Blue).unwrap();
/// surface.add_text(Point::new(0.0, 0.0), "Aa10", TextAnchor::CENTER, Color::Blue).unwrap();
/// surface.show().unwrap();
/// assert!(surface.was_shown());
/// ```
pub trait DrawingSurface {
    /// Set the visible world coordinate range on both axes
    fn set_bounds(&mut self, x_range: (f64, f64), y_range: (f64, f64));

    /// Keep one world unit the same visual length on both axes
    fn set_equal_aspect(&mut self, equal: bool);

    /// Toggle the background grid
    fn set_grid(&mut self, visible: bool);

    /// Add an unfilled circle
    fn add_circle(&mut self, center: Point, radius: f64, stroke: Color) -> Result<()>;

    /// Add an unfilled axis-aligned rectangle extending right and up from `anchor`
    fn add_rectangle(&mut self, anchor: Point, width: f64, height: f64, stroke: Color)
        -> Result<()>;

    /// Add an unfilled closed polygon through `vertices` in order
    fn add_polygon(&mut self, vertices: &[Point], stroke: Color) -> Result<()>;

    /// Add a text label anchored at `at`
    fn add_text(&mut self, at: Point, text: &str, anchor: TextAnchor, color: Color) -> Result<()>;

    fn set_title(&mut self, title: &str);

    fn set_axis_labels(&mut self, x_label: &str, y_label: &str);

    /// Render the finished canvas to the user, blocking until done
    fn show(&mut self) -> Result<()>;

    /// Drop everything drawn so far without displaying it
    fn discard(&mut self);
}

/// A drawing call captured by [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCommand {
    SetBounds {
        x_range: (f64, f64),
        y_range: (f64, f64),
    },
    SetEqualAspect(bool),
    SetGrid(bool),
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
    Title(String),
    AxisLabels {
        x_label: String,
        y_label: String,
    },
    Show,
    Discard,
}

impl SurfaceCommand {
    /// Whether this command adds a shape primitive
    pub fn is_shape(&self) -> bool {
        matches!(
            self,
            SurfaceCommand::Circle { .. }
                | SurfaceCommand::Rectangle { .. }
                | SurfaceCommand::Polygon { .. }
        )
    }
}

/// Surface that records every call instead of drawing
///
/// Rejects negative radii and non-finite coordinates the same way the
/// terminal plot does, so driver behavior can be checked without a terminal.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    commands: Vec<SurfaceCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    /// Shape primitives only, in draw order
    pub fn shapes(&self) -> impl Iterator<Item = &SurfaceCommand> {
        self.commands.iter().filter(|c| c.is_shape())
    }

    /// Labels only, in draw order
    pub fn labels(&self) -> impl Iterator<Item = &SurfaceCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, SurfaceCommand::Text { .. }))
    }

    pub fn was_shown(&self) -> bool {
        self.commands.contains(&SurfaceCommand::Show)
    }

    pub fn was_discarded(&self) -> bool {
        self.commands.contains(&SurfaceCommand::Discard)
    }
}

/// Shared validation for shape primitives
pub(crate) fn check_points(points: &[Point]) -> Result<()> {
    if let Some(bad) = points.iter().find(|p| !p.is_finite()) {
        anyhow::bail!(super::FigureError::render_error(format!(
            "non-finite coordinate {}",
            bad
        )));
    }
    Ok(())
}

/// Shared validation for circle radii
pub(crate) fn check_radius(radius: f64) -> Result<()> {
    if !radius.is_finite() || radius < 0.0 {
        anyhow::bail!(super::FigureError::render_error(format!(
            "radius must be a non-negative finite number, got {}",
            radius
        )));
    }
    Ok(())
}

impl DrawingSurface for RecordingSurface {
    fn set_bounds(&mut self, x_range: (f64, f64), y_range: (f64, f64)) {
        self.commands
            .push(SurfaceCommand::SetBounds { x_range, y_range });
    }

    fn set_equal_aspect(&mut self, equal: bool) {
        self.commands.push(SurfaceCommand::SetEqualAspect(equal));
    }

    fn set_grid(&mut self, visible: bool) {
        self.commands.push(SurfaceCommand::SetGrid(visible));
    }

    fn add_circle(&mut self, center: Point, radius: f64, stroke: Color) -> Result<()> {
        check_points(&[center])?;
        check_radius(radius)?;
        self.commands.push(SurfaceCommand::Circle {
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
        self.commands.push(SurfaceCommand::Rectangle {
            anchor,
            width,
            height,
            stroke,
        });
        Ok(())
    }

    fn add_polygon(&mut self, vertices: &[Point], stroke: Color) -> Result<()> {
        check_points(vertices)?;
        self.commands.push(SurfaceCommand::Polygon {
            vertices: vertices.to_vec(),
            stroke,
        });
        Ok(())
    }

    fn add_text(&mut self, at: Point, text: &str, anchor: TextAnchor, color: Color) -> Result<()> {
        check_points(&[at])?;
        self.commands.push(SurfaceCommand::Text {
            at,
            text: text.to_string(),
            anchor,
            color,
        });
        Ok(())
    }

    fn set_title(&mut self, title: &str) {
        self.commands.push(SurfaceCommand::Title(title.to_string()));
    }

    fn set_axis_labels(&mut self, x_label: &str, y_label: &str) {
        self.commands.push(SurfaceCommand::AxisLabels {
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
        });
    }

    fn show(&mut self) -> Result<()> {
        self.commands.push(SurfaceCommand::Show);
        Ok(())
    }

    fn discard(&mut self) {
        self.commands.push(SurfaceCommand::Discard);
    }
}
