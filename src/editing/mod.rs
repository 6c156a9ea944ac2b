//! Glyph transforms
//!
//! This module contains everything that turns one glyph into another:
//! - Bounding box cropping
//! - Command line manipulators (shift, monospace, optimize)

pub mod manipulate;
pub mod optimize;

pub use manipulate::{manipulate_font, Manipulator};
pub use optimize::optimize_glyph;
