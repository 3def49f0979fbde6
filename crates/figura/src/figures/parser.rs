//! Figure line parser
//!
//! Classifies raw input lines and turns descriptor lines into
//! [`ParseOutcome`]s by trying each grammar in priority order.

use tracing::{debug, trace};

use super::grammar::Grammar;
use crate::core::ParseOutcome;

/// Marker that starts a full-line comment
pub const COMMENT_PREFIX: char = '#';

/// What a raw input line is, before any grammar is attempted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Empty or whitespace only
    Blank,
    /// Starts with `#` after trimming
    Comment,
    /// Anything else, trimmed
    Descriptor(&'a str),
}

impl<'a> LineKind<'a> {
    pub fn classify(raw: &'a str) -> Self {
        let line = raw.trim();
        if line.is_empty() {
            LineKind::Blank
        } else if line.starts_with(COMMENT_PREFIX) {
            LineKind::Comment
        } else {
            LineKind::Descriptor(line)
        }
    }
}

/// Figure descriptor parser
#[derive(Debug, Clone, Copy, Default)]
pub struct FigureParser;

impl FigureParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse one descriptor line
    ///
    /// The line is trimmed first. Grammars are tried in
    /// [`Grammar::PRIORITY`] order and the first full-line match is
    /// converted; no later grammar is attempted after a match, even when
    /// conversion fails.
    pub fn parse_line(&self, line: &str) -> ParseOutcome {
        let line = line.trim();

        let Some((grammar, raw)) = self.recognize(line) else {
            trace!(line, "No grammar matched");
            return ParseOutcome::Unrecognized(line.to_string());
        };

        match raw.convert() {
            Ok(figure) => {
                trace!(?grammar, id = %figure.id(), "Parsed figure");
                ParseOutcome::Figure(figure)
            }
            Err(reason) => {
                debug!(?grammar, line, %reason, "Matched grammar but conversion failed");
                ParseOutcome::Error {
                    line: line.to_string(),
                    reason,
                }
            }
        }
    }

    /// First grammar matching `line` in full, with its raw fields
    pub fn recognize<'a>(&self, line: &'a str) -> Option<(Grammar, super::RawFigure<'a>)> {
        Grammar::PRIORITY
            .iter()
            .find_map(|grammar| grammar.recognize(line).map(|raw| (*grammar, raw)))
    }
}
