//! Glyph tables for the terminal plot
//!
//! Every stroke the plot draws comes from one of these tables so ASCII and
//! Unicode output stay consistent.

use super::CharacterSet;

/// Box drawing characters for rectangles and the plot frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxChars {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl BoxChars {
    /// Standard rectangle box characters
    pub fn rectangle(style: CharacterSet) -> Self {
        match style {
            CharacterSet::Ascii => Self::ascii(),
            CharacterSet::Unicode => Self::unicode(),
        }
    }

    /// Heavier frame drawn around the whole plot area
    pub fn frame(style: CharacterSet) -> Self {
        match style {
            CharacterSet::Ascii => Self::ascii(),
            CharacterSet::Unicode => Self {
                top_left: '╔',
                top_right: '╗',
                bottom_left: '╚',
                bottom_right: '╝',
                horizontal: '═',
                vertical: '║',
            },
        }
    }

    /// ASCII-only box characters
    pub fn ascii() -> Self {
        Self {
            top_left: '+',
            top_right: '+',
            bottom_left: '+',
            bottom_right: '+',
            horizontal: '-',
            vertical: '|',
        }
    }

    /// Unicode light box characters
    pub fn unicode() -> Self {
        Self {
            top_left: '┌',
            top_right: '┐',
            bottom_left: '└',
            bottom_right: '┘',
            horizontal: '─',
            vertical: '│',
        }
    }
}

/// Glyphs for curved and slanted strokes plus the background grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrokeChars {
    /// Circle outline samples
    pub arc: char,
    /// Polygon edges
    pub edge: char,
    /// Grid lattice points
    pub grid: char,
    /// Horizontal axis through the origin
    pub axis_horizontal: char,
    /// Vertical axis through the origin
    pub axis_vertical: char,
    /// Where the two axes cross
    pub origin: char,
}

impl StrokeChars {
    pub fn for_style(style: CharacterSet) -> Self {
        match style {
            CharacterSet::Ascii => Self {
                arc: 'o',
                edge: '*',
                grid: '.',
                axis_horizontal: '-',
                axis_vertical: ':',
                origin: '+',
            },
            CharacterSet::Unicode => Self {
                arc: '•',
                edge: '∙',
                grid: '·',
                axis_horizontal: '┄',
                axis_vertical: '┆',
                origin: '┼',
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_tables_are_ascii() {
        let b = BoxChars::rectangle(CharacterSet::Ascii);
        let s = StrokeChars::for_style(CharacterSet::Ascii);
        let all = [
            b.top_left,
            b.top_right,
            b.bottom_left,
            b.bottom_right,
            b.horizontal,
            b.vertical,
            s.arc,
            s.edge,
            s.grid,
            s.axis_horizontal,
            s.axis_vertical,
            s.origin,
        ];
        assert!(all.iter().all(char::is_ascii));
    }

    #[test]
    fn test_unicode_rectangle_corners() {
        let b = BoxChars::rectangle(CharacterSet::Unicode);
        assert_eq!(b.top_left, '┌');
        assert_eq!(b.bottom_right, '┘');
        assert_ne!(BoxChars::frame(CharacterSet::Unicode), b);
    }
}
