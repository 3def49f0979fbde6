//! Core error types for figure processing
//!
//! File-level failures end a run; every other variant is reported against a
//! single input line and the run carries on.

use std::num::ParseFloatError;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Core error types for figure processing
#[derive(Error, Debug)]
pub enum FigureError {
    #[error("File not found: '{}'", path.display())]
    FileNotFound { path: PathBuf },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("Field conversion error: {field} '{value}' is not a real number ({source})")]
    FieldConversion {
        field: &'static str,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("Unrecognized line: {line}")]
    UnrecognizedLine { line: String },

    #[error("Render error: {message}")]
    Render { message: String },
}

impl FigureError {
    /// Create a new file-not-found error
    pub fn file_not_found(path: impl AsRef<Path>) -> Self {
        Self::FileNotFound {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create a new field conversion error
    pub fn field_conversion(
        field: &'static str,
        value: impl Into<String>,
        source: ParseFloatError,
    ) -> Self {
        Self::FieldConversion {
            field,
            value: value.into(),
            source,
        }
    }

    /// Create a new unrecognized-line error
    pub fn unrecognized(line: impl Into<String>) -> Self {
        Self::UnrecognizedLine { line: line.into() }
    }

    /// Create a new render error
    pub fn render_error(message: impl Into<String>) -> Self {
        Self::Render {
            message: message.into(),
        }
    }
}
