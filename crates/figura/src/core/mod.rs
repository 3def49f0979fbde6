//! Core building blocks for figure processing
//!
//! Figure records and geometry, the shared grammar pieces, the drawing
//! surface abstraction, the character canvas, errors and logging.

mod canvas;
pub mod chumsky_utils;
mod error;
mod glyphs;
pub mod logging;
mod surface;
mod types;

pub use canvas::*;
pub use error::*;
pub use glyphs::*;
pub use logging::*;
pub use surface::*;
pub use types::*;
