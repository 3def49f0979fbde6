//! Terminal colorization for plot output
//!
//! Applies ANSI escape codes to plot cells using crossterm. Each cell keeps
//! the stroke color of the figure that drew it; frame, grid and axis cells
//! stay uncolored.

use crossterm::style::{self, Stylize};
use figura::plot::PlotFrame;
use figura::{Cell, Color};

fn term_color(color: Color) -> style::Color {
    match color {
        Color::Blue => style::Color::Blue,
        Color::Green => style::Color::Green,
        Color::Red => style::Color::Red,
    }
}

/// Colorize a rendered plot frame using ANSI escape codes
///
/// Consecutive cells of the same color share one escape sequence. Trailing
/// blanks are trimmed per row, matching the plain rendering.
pub fn colorize_frame(frame: &PlotFrame) -> String {
    let rows: Vec<String> = frame.canvas.grid.iter().map(|row| colorize_row(row)).collect();
    rows.join("\n")
}

fn colorize_row(row: &[Cell]) -> String {
    let end = row
        .iter()
        .rposition(|cell| !cell.is_blank())
        .map_or(0, |i| i + 1);

    let mut result = String::new();
    let mut run = String::new();
    let mut run_color: Option<Color> = None;

    for cell in &row[..end] {
        if cell.color != run_color && !run.is_empty() {
            push_run(&mut result, &run, run_color);
            run.clear();
        }
        run_color = cell.color;
        run.push(cell.glyph);
    }
    push_run(&mut result, &run, run_color);
    result
}

fn push_run(out: &mut String, text: &str, color: Option<Color>) {
    if text.is_empty() {
        return;
    }
    match color {
        Some(color) => out.push_str(&text.with(term_color(color)).to_string()),
        None => out.push_str(text),
    }
}
