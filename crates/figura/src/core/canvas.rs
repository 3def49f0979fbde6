//! Character-cell canvas used by the terminal plot
//!
//! A fixed grid of cells, each holding a glyph and an optional color.
//! Coordinates are signed so callers can plot shapes that leave the grid;
//! anything outside is clipped.

use unicode_width::UnicodeWidthStr;

use super::types::Color;

/// One cell of the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub color: Option<Color>,
}

impl Cell {
    pub const BLANK: Cell = Cell {
        glyph: ' ',
        color: None,
    };

    pub fn is_blank(&self) -> bool {
        self.glyph == ' '
    }
}

/// Canvas representing a character grid for plot rendering
#[derive(Debug, Clone)]
pub struct AsciiCanvas {
    pub width: usize,
    pub height: usize,
    pub grid: Vec<Vec<Cell>>,
}

impl AsciiCanvas {
    /// Create a new blank canvas with the specified dimensions
    pub fn new(width: usize, height: usize) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            grid: vec![vec![Cell::BLANK; width]; height],
        }
    }

    fn index(&self, col: i64, row: i64) -> Option<(usize, usize)> {
        let col = usize::try_from(col).ok()?;
        let row = usize::try_from(row).ok()?;
        (col < self.width && row < self.height).then_some((col, row))
    }

    /// Set a cell, ignoring positions outside the canvas
    pub fn plot(&mut self, col: i64, row: i64, glyph: char, color: Option<Color>) {
        if let Some((c, r)) = self.index(col, row) {
            self.grid[r][c] = Cell { glyph, color };
        }
    }

    /// Set a cell only if it is still blank
    pub fn plot_under(&mut self, col: i64, row: i64, glyph: char) {
        if self.get(col, row).is_some_and(|cell| cell.is_blank()) {
            self.plot(col, row, glyph, None);
        }
    }

    /// Get the cell at the specified position
    pub fn get(&self, col: i64, row: i64) -> Option<Cell> {
        self.index(col, row).map(|(c, r)| self.grid[r][c])
    }

    /// Get the glyph at the specified position, blank when out of range
    pub fn get_char(&self, col: i64, row: i64) -> char {
        self.get(col, row).map_or(' ', |cell| cell.glyph)
    }

    /// Draw text starting at the specified position (left-aligned)
    pub fn draw_text(&mut self, col: i64, row: i64, text: &str, color: Option<Color>) {
        for (i, ch) in text.chars().enumerate() {
            self.plot(col.saturating_add(i as i64), row, ch, color);
        }
    }

    /// Draw text centered at the specified column
    pub fn draw_text_centered(&mut self, center: i64, row: i64, text: &str, color: Option<Color>) {
        let start = center.saturating_sub((text_width(text) / 2) as i64);
        self.draw_text(start, row, text, color);
    }

    /// Draw a straight line between two cells with a DDA walk
    ///
    /// The segment is clipped to the canvas first, so only the visible steps
    /// are walked however far away the endpoints are.
    pub fn draw_line(
        &mut self,
        from: (i64, i64),
        to: (i64, i64),
        glyph: char,
        color: Option<Color>,
    ) {
        let origin = (from.0 as f64, from.1 as f64);
        let delta = (to.0 as f64 - origin.0, to.1 as f64 - origin.1);
        let steps = delta.0.abs().max(delta.1.abs());
        if steps == 0.0 {
            self.plot(from.0, from.1, glyph, color);
            return;
        }
        let Some((t0, t1)) = self.clip(origin, delta) else {
            return;
        };
        let first = (t0 * steps).floor().max(0.0) as i64;
        let last = (t1 * steps).ceil().min(steps) as i64;
        for step in first..=last {
            let t = step as f64 / steps;
            let col = origin.0 + delta.0 * t;
            let row = origin.1 + delta.1 * t;
            self.plot(col.round() as i64, row.round() as i64, glyph, color);
        }
    }

    /// Liang-Barsky clip of `origin + t * delta` against the canvas cells
    fn clip(&self, origin: (f64, f64), delta: (f64, f64)) -> Option<(f64, f64)> {
        let (min_x, max_x) = (-0.5, self.width as f64 - 0.5);
        let (min_y, max_y) = (-0.5, self.height as f64 - 0.5);
        let edges = [
            (-delta.0, origin.0 - min_x),
            (delta.0, max_x - origin.0),
            (-delta.1, origin.1 - min_y),
            (delta.1, max_y - origin.1),
        ];
        let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
        for (p, q) in edges {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
            } else {
                let r = q / p;
                if p < 0.0 {
                    t0 = t0.max(r);
                } else {
                    t1 = t1.min(r);
                }
            }
        }
        (t0 <= t1).then_some((t0, t1))
    }

    /// Rows as plain strings, trailing blanks kept so columns line up
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.grid
            .iter()
            .map(|row| row.iter().map(|cell| cell.glyph).collect())
    }
}

/// Display width of a string in terminal columns
pub fn text_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

impl std::fmt::Display for AsciiCanvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rows: Vec<String> = self.rows().map(|row| row.trim_end().to_string()).collect();
        write!(f, "{}", rows.join("\n"))
    }
}
