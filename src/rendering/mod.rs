//! Text layout and rendering
//!
//! This module contains the single-line layout engine and the canvas it
//! draws into for `pftk draw`.

pub mod draw;
pub mod layout;

// Re-export commonly used items
pub use draw::{draw_text, CanvasSink};
pub use layout::{PixelSink, TextExtents, TextLayout};
